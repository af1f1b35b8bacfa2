use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::{Config, WeatherSnapshot, provider::openweather::OpenWeatherProvider};

pub mod openweather;

/// Why a live lookup was abandoned.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No API key configured for the weather provider")]
    MissingApiKey,

    #[error("Request to weather provider failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Weather provider returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Weather provider response is malformed: {0}")]
    Malformed(String),
}

/// Source of live weather readings.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for `city` in `country`, tagged as live data.
    async fn current_weather(
        &self,
        city: &str,
        country: &str,
    ) -> Result<WeatherSnapshot, ProviderError>;
}

/// Construct the live provider from configuration.
///
/// A missing API key is not an error here: the provider is still built and
/// every lookup degrades to synthetic data.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, ProviderError> {
    if !config.is_api_configured() {
        tracing::warn!("No weather API key configured; all readings will be simulated");
    }

    let provider = OpenWeatherProvider::new(&config.provider)?;
    Ok(Box::new(provider))
}
