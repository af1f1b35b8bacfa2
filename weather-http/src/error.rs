//! Handler errors and the failure envelope

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Errors surfaced to API callers.
///
/// Weather lookups themselves never fail; only malformed requests end up here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Invalid days: {0}")]
    InvalidDays(String),
}

/// `{"success": false, "error": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for ApiError {
    /// Failures keep HTTP 200; callers inspect `success`.
    fn into_response(self) -> Response {
        warn!(error = %self, "Rejected API request");

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}
