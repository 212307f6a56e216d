use axum::{extract::State, response::Json as JsonResponse, routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::state::{AppState, SharedAppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
  pub status: String,
  pub environment: String,
  #[serde(rename = "emailConfigured")]
  pub email_configured: bool,
  pub version: String,
  pub timestamp: String,
}

pub fn health_routes() -> Router<SharedAppState> {
  Router::new().route("/health", get(health_handler))
}

async fn health_handler(State(state): State<SharedAppState>) -> JsonResponse<HealthResponse> {
  JsonResponse(HealthResponse {
    status: "ok".to_string(),
    environment: state.environment().to_string(),
    email_configured: state.email_configured(),
    version: env!("CARGO_PKG_VERSION").to_string(),
    timestamp: chrono::Utc::now().to_rfc3339(),
  })
}

#[cfg(test)]
mod tests {
  use super::HealthResponse;
  use crate::email::MockMailer;
  use crate::test_support::{app_with_config, get, test_config};
  use axum::http::StatusCode;

  #[tokio::test]
  async fn health_reports_configured_email() {
    let app = app_with_config(test_config(), MockMailer::new());
    let (status, body) = get(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    let response: HealthResponse = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(response.status, "ok");
    assert_eq!(response.environment, "test");
    assert!(response.email_configured);
    assert!(chrono::DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
  }

  #[tokio::test]
  async fn health_reports_missing_email_settings() {
    let mut config = test_config();
    config.smtp.password = String::new();

    let app = app_with_config(config, MockMailer::new());
    let (status, body) = get(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    let raw: serde_json::Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(raw["emailConfigured"], false);
    assert!(raw.get("email_configured").is_none());
  }
}
