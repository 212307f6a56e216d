use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::email::SmtpConfig;

pub const DEFAULT_SITE_NAME: &str = "Jayid Botamed Health Care";

#[derive(Debug, Clone)]
pub struct ContactConfig {
  pub receiver_email: String,
  pub site_name: String,
}

/// Process-wide settings, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub port: u16,
  pub environment: String,
  pub static_dir: PathBuf,
  pub smtp: SmtpConfig,
  pub contact: ContactConfig,
}

impl AppConfig {
  /// Reads settings from the environment. Missing email settings are tolerated
  /// and surface later as an SMTP failure; malformed ports are rejected.
  pub fn from_env() -> Result<Self> {
    let sender_email = env::var("SENDER_EMAIL").unwrap_or_default();
    let sender_password = env::var("SENDER_PASSWORD").unwrap_or_default();

    let smtp = SmtpConfig {
      host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
      port: parse_port("SMTP_PORT", 587)?,
      username: sender_email.clone(),
      password: sender_password,
      from_email: sender_email,
    };

    let contact = ContactConfig {
      receiver_email: env::var("RECEIVER_EMAIL").unwrap_or_default(),
      site_name: env::var("CONTACT_SITE_NAME").unwrap_or_else(|_| DEFAULT_SITE_NAME.to_string()),
    };

    Ok(Self {
      port: parse_port("PORT", 5000)?,
      environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
      static_dir: env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("static")),
      smtp,
      contact,
    })
  }

  pub fn missing_email_settings(&self) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if self.smtp.from_email.is_empty() {
      missing.push("SENDER_EMAIL");
    }
    if self.smtp.password.is_empty() {
      missing.push("SENDER_PASSWORD");
    }
    if self.contact.receiver_email.is_empty() {
      missing.push("RECEIVER_EMAIL");
    }
    missing
  }

  pub fn email_configured(&self) -> bool {
    self.missing_email_settings().is_empty()
  }
}

fn parse_port(var: &str, default: u16) -> Result<u16> {
  match env::var(var) {
    Ok(value) => value
      .trim()
      .parse()
      .with_context(|| format!("{} must be a valid port number, got {:?}", var, value)),
    Err(_) => Ok(default),
  }
}
