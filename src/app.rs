use axum::{
  extract::OriginalUri,
  http::{header, Method, StatusCode},
  response::{Html, IntoResponse, Json, Response},
  routing::get,
  Router,
};
use serde_json::json;
use tower_http::{
  cors::{Any, CorsLayer},
  services::ServeDir,
  trace::TraceLayer,
};

use crate::{
  domains::{contact::rest::contact_routes, health::rest::health_routes},
  state::SharedAppState,
  AppError,
};

const LANDING_PAGE: &str = include_str!("../templates/home.html");

pub fn create_app(state: SharedAppState) -> Router {
  let static_dir = state.config.static_dir.clone();

  let api = Router::new()
    .merge(contact_routes())
    .merge(health_routes())
    .fallback(api_not_found_handler)
    .layer(cors_layer());

  Router::new()
    .route("/", get(landing_page_handler))
    .nest("/api", api)
    .nest_service("/static", ServeDir::new(static_dir))
    .fallback(page_fallback_handler)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
}

pub async fn landing_page_handler() -> Html<&'static str> {
  Html(LANDING_PAGE)
}

async fn api_not_found_handler(method: Method, OriginalUri(uri): OriginalUri) -> Response {
  tracing::warn!("API endpoint not found: {} {}", method, uri.path());

  let body = Json(json!({
    "error": "API endpoint not found",
    "method": method.as_str(),
    "path": uri.path(),
  }));
  (StatusCode::NOT_FOUND, body).into_response()
}

// Unknown page paths render the landing page so client-side routes resolve.
async fn page_fallback_handler(method: Method) -> Response {
  if method == Method::GET || method == Method::HEAD {
    landing_page_handler().await.into_response()
  } else {
    AppError::not_found("Not found").into_response()
  }
}
