//! Health check handler

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
    /// Whether a provider API key is set; without one every reading is simulated.
    pub api_configured: bool,
    pub location_scope: String,
}

/// Liveness check - is the server running?
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Weather forecast application is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        api_configured: state.config.is_api_configured(),
        location_scope: "India only".to_string(),
    })
}
