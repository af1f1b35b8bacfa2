//! Forecast synthesis.
//!
//! A single observation is projected forward by blending it towards a
//! one-harmonic seasonal baseline over a 30-day horizon and adding bounded
//! noise. Results are illustrative, not meteorologically meaningful.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};
use rand::Rng;

use crate::model::{Condition, ForecastDay, WeatherSnapshot};

const BLEND_HORIZON_DAYS: f64 = 30.0;

const HUMIDITY_BOUNDS: (f64, f64) = (30.0, 90.0);
const PRESSURE_BOUNDS: (f64, f64) = (1000.0, 1020.0);

/// Annual temperature cycle: `20 + 8 sin(2π · day_of_year / 365)`.
///
/// No leap-year correction; day 366 simply runs one step past the cycle.
pub fn seasonal_baseline(date: NaiveDate) -> f64 {
    let day_of_year = f64::from(date.ordinal());
    20.0 + 8.0 * (2.0 * PI * day_of_year / 365.0).sin()
}

/// Fixed-priority condition rule on the projected temperature and the
/// current humidity.
pub fn classify_condition(temperature: f64, humidity: f64) -> Condition {
    if humidity > 80.0 && temperature > 35.0 {
        Condition::Rainy
    } else if humidity > 70.0 {
        Condition::Cloudy
    } else if temperature > 35.0 {
        Condition::Sunny
    } else {
        Condition::PartlyCloudy
    }
}

/// Noise-free temperature projection for `days_ahead` days.
///
/// Linear in `days_ahead` and unclamped, so past the 30-day horizon
/// it overshoots the seasonal baseline.
pub fn blended_temperature(current: f64, baseline: f64, days_ahead: i64) -> f64 {
    current + (baseline - current) * (days_ahead as f64 / BLEND_HORIZON_DAYS)
}

/// Project `current` onto `date`, where `today` is the date of the reading.
///
/// Every day is derived from the same reading; nothing is chained.
pub fn predict_future_weather<R: Rng + ?Sized>(
    date: NaiveDate,
    today: NaiveDate,
    current: &WeatherSnapshot,
    rng: &mut R,
) -> ForecastDay {
    let days_ahead = (date - today).num_days();
    let baseline = seasonal_baseline(date);

    let temperature = blended_temperature(current.temperature, baseline, days_ahead)
        + rng.random_range(-3.0..3.0);

    let condition = classify_condition(temperature, current.humidity);

    let humidity = clamp(
        current.humidity + rng.random_range(-10.0..10.0),
        HUMIDITY_BOUNDS,
    );
    let pressure = clamp(
        current.pressure + rng.random_range(-5.0..5.0),
        PRESSURE_BOUNDS,
    );
    let wind_speed = current.wind_speed + rng.random_range(-2.0..2.0);

    ForecastDay {
        date,
        temperature: round_to_tenth(temperature),
        condition,
        humidity,
        pressure,
        wind_speed,
    }
}

fn clamp(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.max(lo).min(hi)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
