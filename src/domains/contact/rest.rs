use axum::{body::Bytes, extract::State, response::Json as JsonResponse, routing::post, Router};

use super::model::{ContactResponse, ContactSubmission};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new().route("/contact", post(contact_handler))
}

/// Takes the raw body so that a missing or malformed payload maps to the
/// contact error responses instead of axum's extractor rejections.
pub async fn contact_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<JsonResponse<ContactResponse>, AppError> {
  tracing::info!("Contact endpoint hit");

  let submission = ContactSubmission::from_body(&body)?;
  state.submit_contact(submission).await?;

  Ok(JsonResponse(ContactResponse::sent()))
}
