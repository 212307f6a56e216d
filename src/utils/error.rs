use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::domains::contact::service::ContactServiceError;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn not_found(message: impl Into<String>) -> Self {
    Self::new(StatusCode::NOT_FOUND, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({ "error": self.message }));

    (self.status_code, body).into_response()
  }
}

impl From<ContactServiceError> for AppError {
  fn from(error: ContactServiceError) -> Self {
    match error {
      ContactServiceError::NoData | ContactServiceError::MissingFields => {
        tracing::debug!("Rejected contact submission: {}", error);
        AppError::bad_request(error.to_string())
      }
      ContactServiceError::Delivery(e) => AppError::internal_server_error(e.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use http_body_util::BodyExt;

  async fn render(error: AppError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
  }

  #[tokio::test]
  async fn test_app_error_renders_error_field_only() {
    let (status, body) = render(AppError::bad_request("No data provided")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No data provided" }));
  }

  #[tokio::test]
  async fn test_contact_errors_map_to_status() {
    let no_data: AppError = ContactServiceError::NoData.into();
    assert_eq!(no_data.status_code, StatusCode::BAD_REQUEST);
    assert_eq!(no_data.message, "No data provided");

    let missing: AppError = ContactServiceError::MissingFields.into();
    assert_eq!(missing.status_code, StatusCode::BAD_REQUEST);
    assert_eq!(missing.message, "All fields are required");

    let address_err = "nope".parse::<lettre::Address>().unwrap_err();
    let description = address_err.to_string();
    let delivery: AppError = ContactServiceError::Delivery(address_err.into()).into();
    assert_eq!(delivery.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(delivery.message, description);
  }
}
