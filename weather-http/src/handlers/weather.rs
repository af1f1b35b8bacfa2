//! Current weather and forecast handlers

use axum::{Json, body::Bytes, extract::State};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::info;
use weather_core::{DEFAULT_CITY, DEFAULT_COUNTRY, ForecastBundle, WeatherSnapshot};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Default, Deserialize)]
pub struct CurrentWeatherRequest {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastRequest {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Integer, float or numeric string.
    #[serde(default)]
    pub days: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentWeatherResponse {
    pub success: bool,
    pub weather: WeatherSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    pub success: bool,
    pub forecast: ForecastBundle,
}

/// `POST /api/weather/current`
pub async fn current_weather(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CurrentWeatherResponse>, ApiError> {
    let request: CurrentWeatherRequest = parse_body(&body)?;
    let city = or_default(request.city, DEFAULT_CITY);
    let country = or_default(request.country, DEFAULT_COUNTRY);

    let fetched = state.service.current_weather(&city, &country).await;
    info!(%city, source = %fetched.snapshot().source, "Current weather served");

    Ok(Json(CurrentWeatherResponse {
        success: true,
        weather: fetched.into_snapshot(),
    }))
}

/// `POST /api/weather/forecast`
pub async fn forecast(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ForecastResponse>, ApiError> {
    let request: ForecastRequest = parse_body(&body)?;
    let city = or_default(request.city, DEFAULT_CITY);
    let country = or_default(request.country, DEFAULT_COUNTRY);
    let limits = &state.config.forecast;
    let days = coerce_days(request.days.as_ref(), limits.default_days, limits.max_days)?;

    let forecast = state.service.generate_forecast(&city, &country, days).await;

    Ok(Json(ForecastResponse {
        success: true,
        forecast,
    }))
}

/// Parse a JSON body; an empty body means "all defaults".
fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(body)?)
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Interpret a loosely typed `days` value.
fn coerce_days(value: Option<&Value>, default: u32, max: u32) -> Result<u32, ApiError> {
    let days: i64 = match value {
        None | Some(Value::Null) => return Ok(default),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .ok_or_else(|| ApiError::InvalidDays(format!("'{n}' is out of range")))?,
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| ApiError::InvalidDays(format!("'{s}' is not an integer")))?,
        Some(other) => {
            return Err(ApiError::InvalidDays(format!(
                "expected an integer, got {other}"
            )));
        }
    };

    if days < 0 {
        return Err(ApiError::InvalidDays(format!(
            "{days} must be a non-negative integer"
        )));
    }

    match u32::try_from(days) {
        Ok(days) if days <= max => Ok(days),
        _ => Err(ApiError::InvalidDays(format!(
            "{days} exceeds the maximum of {max}"
        ))),
    }
}
