#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
  pub to: String,
  pub subject: String,
  pub body: String,
}

impl EmailMessage {
  pub fn new(to: String, subject: String, body: String) -> Self {
    EmailMessage { to, subject, body }
  }
}

/// Failure while building or delivering a message.
///
/// Every variant renders as the underlying library's description, which is
/// what ends up in the `error` field of a 500 response.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
  #[error("{0}")]
  InvalidAddress(#[from] lettre::address::AddressError),
  #[error("{0}")]
  Build(#[from] lettre::error::Error),
  #[error("{0}")]
  Transport(#[from] lettre::transport::smtp::Error),
}
