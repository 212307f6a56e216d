use std::sync::Arc;

use crate::{
  config::AppConfig,
  domains::contact::{
    model::ContactSubmission,
    service::{ContactService, ContactServiceError, ContactServiceImpl},
  },
  email::Mailer,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit_contact(
    &self,
    submission: ContactSubmission,
  ) -> impl std::future::Future<Output = Result<(), ContactServiceError>> + Send;
  fn environment(&self) -> &str;
  fn email_configured(&self) -> bool;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub config: Arc<AppConfig>,
  pub contact_service: Arc<dyn ContactService>,
}

impl SharedAppState {
  pub fn new<M>(config: AppConfig, mailer: M) -> Self
  where
    M: Mailer + 'static,
  {
    let contact_service = Arc::new(ContactServiceImpl::new(mailer, config.contact.clone()));

    Self {
      config: Arc::new(config),
      contact_service,
    }
  }
}

impl AppState for SharedAppState {
  async fn submit_contact(&self, submission: ContactSubmission) -> Result<(), ContactServiceError> {
    self.contact_service.submit(submission).await
  }

  fn environment(&self) -> &str {
    &self.config.environment
  }

  fn email_configured(&self) -> bool {
    self.config.email_configured()
  }
}
