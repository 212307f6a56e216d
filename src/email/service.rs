use crate::email::types::{EmailError, EmailMessage, SmtpConfig};
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError>;
}

/// SMTP mailer. The transport is built without a connection pool, so every
/// `send_email` call opens, authenticates and closes its own session.
pub struct EmailService {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(EmailService {
      smtp_config,
      transporter,
    })
  }

  pub fn build_message(&self, message: &EmailMessage) -> Result<Message, EmailError> {
    let email = Message::builder()
      .from(self.smtp_config.from_email.parse()?)
      .to(message.to.parse()?)
      .subject(&message.subject)
      .header(ContentType::TEXT_PLAIN)
      .body(message.body.clone())?;

    Ok(email)
  }
}

#[async_trait]
impl Mailer for EmailService {
  async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
    let email = self.build_message(&message)?;
    self.transporter.send(email).await?;

    Ok(())
  }
}
