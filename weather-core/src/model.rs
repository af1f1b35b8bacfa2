use std::{fmt, sync::Arc};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::provider::ProviderError;

/// Country code used when a caller does not name one.
pub const DEFAULT_COUNTRY: &str = "IN";

/// City used when a caller does not name one.
pub const DEFAULT_CITY: &str = "Mumbai";

/// Where a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Api,
    Fallback,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Api => "api",
            DataSource::Fallback => "fallback",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sky condition produced by the fallback generator and the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "sunny")]
    Sunny,
    #[serde(rename = "cloudy")]
    Cloudy,
    #[serde(rename = "partly cloudy")]
    PartlyCloudy,
    #[serde(rename = "rainy")]
    Rainy,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
            Condition::PartlyCloudy => "partly cloudy",
            Condition::Rainy => "rainy",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One weather reading, live or synthetic.
///
/// `condition` is free-form: live readings carry the provider's lower-cased
/// label ("clouds", "haze", ...), synthetic ones one of [`Condition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub condition: String,
    pub description: String,
    /// Unit as reported by the source; not normalized.
    pub wind_speed: f64,
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    pub source: DataSource,
}

/// One projected day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temperature: f64,
    pub condition: Condition,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
}

impl Location {
    /// Location of a snapshot; unknown coordinates become 0/0.
    pub fn of(snapshot: &WeatherSnapshot) -> Self {
        Self {
            city: snapshot.city.clone(),
            country: snapshot.country.clone(),
            coordinates: Coordinates {
                lat: snapshot.lat.unwrap_or(0.0),
                lon: snapshot.lon.unwrap_or(0.0),
            },
        }
    }
}

/// Complete multi-day response payload for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastBundle {
    pub location: Location,
    pub current_weather: WeatherSnapshot,
    pub forecasts: Vec<ForecastDay>,
    pub generated_at: DateTime<Utc>,
    pub data_source: DataSource,
}

/// Outcome of a current-weather lookup.
///
/// Lookups never fail outright: when the provider is unusable the caller gets
/// synthetic data together with the reason the live path was abandoned.
#[derive(Debug, Clone)]
pub enum Fetched {
    Live(WeatherSnapshot),
    Degraded {
        snapshot: WeatherSnapshot,
        reason: Arc<ProviderError>,
    },
}

impl Fetched {
    pub fn snapshot(&self) -> &WeatherSnapshot {
        match self {
            Fetched::Live(snapshot) | Fetched::Degraded { snapshot, .. } => snapshot,
        }
    }

    pub fn into_snapshot(self) -> WeatherSnapshot {
        match self {
            Fetched::Live(snapshot) | Fetched::Degraded { snapshot, .. } => snapshot,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Fetched::Degraded { .. })
    }

    pub fn reason(&self) -> Option<&ProviderError> {
        match self {
            Fetched::Live(_) => None,
            Fetched::Degraded { reason, .. } => Some(reason),
        }
    }
}
