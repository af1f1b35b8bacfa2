//! Core library for the weather service.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The live weather provider and its location cache
//! - Synthetic fallback readings for when the provider is unusable
//! - Forecast synthesis from a single current reading
//!
//! It is used by `weather-http` and `weather-cli`.

pub mod cache;
pub mod cities;
pub mod config;
pub mod fallback;
pub mod fetcher;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod random;
pub mod synth;

pub use cache::{CacheKey, LocationCache};
pub use cities::{LocationEntry, search_locations};
pub use config::Config;
pub use fetcher::WeatherFetcher;
pub use forecast::ForecastService;
pub use model::{
    Condition, DEFAULT_CITY, DEFAULT_COUNTRY, DataSource, Fetched, ForecastBundle, ForecastDay,
    WeatherSnapshot,
};
pub use provider::{ProviderError, WeatherProvider};
pub use random::Entropy;
