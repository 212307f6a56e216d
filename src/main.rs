use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use contact_relay::app::create_app;
use contact_relay::config::AppConfig;
use contact_relay::email::EmailService;
use contact_relay::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("contact_relay=info,tower_http=info")),
    )
    .init();

  let config = AppConfig::from_env()?;

  let missing = config.missing_email_settings();
  if !missing.is_empty() {
    tracing::warn!(
      "Missing email settings: {}. Contact submissions will fail until they are set.",
      missing.join(", ")
    );
  }

  let email_service = EmailService::new(config.smtp.clone())?;
  let addr = format!("0.0.0.0:{}", config.port);
  let app = create_app(SharedAppState::new(config, email_service));

  let listener = tokio::net::TcpListener::bind(&addr).await?;

  tracing::info!("Server running on http://{}", addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
