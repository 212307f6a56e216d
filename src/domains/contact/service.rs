use async_trait::async_trait;

use super::model::ContactSubmission;
use crate::{
  config::ContactConfig,
  email::{EmailError, EmailMessage, Mailer},
  utils::single_line,
};

#[derive(Debug, thiserror::Error)]
pub enum ContactServiceError {
  #[error("No data provided")]
  NoData,
  #[error("All fields are required")]
  MissingFields,
  #[error(transparent)]
  Delivery(#[from] EmailError),
}

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactServiceError>;
}

pub struct ContactServiceImpl<M> {
  mailer: M,
  config: ContactConfig,
}

impl<M> ContactServiceImpl<M>
where
  M: Mailer,
{
  pub fn new(mailer: M, config: ContactConfig) -> Self {
    Self { mailer, config }
  }

  pub fn compose_email(&self, submission: &ContactSubmission) -> EmailMessage {
    let subject = format!("New Contact Form Message from {}", single_line(&submission.name));
    let body = format!(
      "\nNew message from {} website:\n\nName: {}\nPhone: {}\n\nMessage:\n{}\n        ",
      self.config.site_name, submission.name, submission.phone, submission.message
    );

    EmailMessage::new(self.config.receiver_email.clone(), subject, body)
  }
}

#[async_trait]
impl<M> ContactService for ContactServiceImpl<M>
where
  M: Mailer,
{
  async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactServiceError> {
    let email = self.compose_email(&submission);

    tracing::info!("Attempting to send contact email from {}", submission.name);
    match self.mailer.send_email(email).await {
      Ok(()) => {
        tracing::info!("Contact email sent successfully");
        Ok(())
      }
      Err(e) => {
        tracing::error!("Failed to send contact email: {:?}", e);
        Err(e.into())
      }
    }
  }
}
