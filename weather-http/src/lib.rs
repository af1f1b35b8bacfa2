//! HTTP API for the weather service
//!
//! Exposes current weather, forecasts, city search and a health check over
//! JSON. Handler failures are reported in the body (`success: false`) with
//! HTTP 200.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use anyhow::Context;
use tokio::{net::TcpListener, signal};
use tracing::info;
use weather_core::{Config, ForecastService};

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: Config, service: ForecastService) -> anyhow::Result<()> {
    let host = config.server.host.as_str();
    let port = config.server.port;
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;

    info!(
        address = %listener.local_addr()?,
        api_configured = config.is_api_configured(),
        "Weather server listening"
    );

    let app = create_router(AppState::new(service, config));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Weather server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
