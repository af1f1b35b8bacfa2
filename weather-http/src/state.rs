//! Application state shared across handlers

use std::sync::Arc;

use weather_core::{Config, ForecastService};

#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather lookups and forecast synthesis
    pub service: Arc<ForecastService>,
    /// Effective configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(service: ForecastService, config: Config) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }
}
