//! Email sending functionality module
//!
//! `Mailer` is the transport seam used by the contact relay. `EmailService`
//! implements it over SMTP using lettre; tests substitute a mock.

mod service;
mod types;

pub use service::{EmailService, Mailer};
pub use types::{EmailError, EmailMessage, SmtpConfig};

#[cfg(test)]
pub use service::MockMailer;
