//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(handlers::health::health_check))
        // Weather API
        .route(
            "/api/weather/current",
            post(handlers::weather::current_weather),
        )
        .route("/api/weather/forecast", post(handlers::weather::forecast))
        .route("/api/locations/search", get(handlers::locations::search))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        // Attach state
        .with_state(state)
}
