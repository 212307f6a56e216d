use std::path::PathBuf;

use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::{AppConfig, ContactConfig},
  email::{Mailer, SmtpConfig},
  state::SharedAppState,
};

pub fn test_config() -> AppConfig {
  AppConfig {
    port: 0,
    environment: "test".to_string(),
    static_dir: PathBuf::from("static"),
    smtp: SmtpConfig {
      host: "localhost".to_string(),
      port: 1025,
      username: "sender@example.com".to_string(),
      password: "secret".to_string(),
      from_email: "sender@example.com".to_string(),
    },
    contact: ContactConfig {
      receiver_email: "owner@example.com".to_string(),
      site_name: "Jayid Botamed Health Care".to_string(),
    },
  }
}

pub fn app_with_config<M: Mailer + 'static>(config: AppConfig, mailer: M) -> Router {
  create_app(SharedAppState::new(config, mailer))
}

pub fn app_with_mailer<M: Mailer + 'static>(mailer: M) -> Router {
  app_with_config(test_config(), mailer)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  post_raw(app, uri, serde_json::to_vec(body).expect("serialize request body")).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(body.into())
    .expect("build request");

  send(app, request).await
}
