//! Synthetic weather used when the live provider cannot be reached.

use rand::Rng;

use crate::{
    cities::{COUNTRY_CODE, find_city},
    model::{Condition, DataSource, WeatherSnapshot},
};

pub const FALLBACK_DESCRIPTION: &str = "simulated data";

const GENERIC_BASELINE_C: f64 = 25.0;
const FALLBACK_CONDITIONS: [Condition; 3] =
    [Condition::Sunny, Condition::Cloudy, Condition::PartlyCloudy];

/// Plausible synthetic reading for `city`, re-randomized on every call.
pub fn get_fallback_weather<R: Rng + ?Sized>(city: &str, rng: &mut R) -> WeatherSnapshot {
    let temperature = match find_city(city) {
        Some(known) => known.baseline_c + rng.random_range(known.offset_c.clone()),
        None => GENERIC_BASELINE_C + rng.random_range(-5.0..5.0),
    };

    let humidity = 65.0 + rng.random_range(-20.0..20.0);
    let pressure = 1010.0 + rng.random_range(-10.0..10.0);
    let condition = FALLBACK_CONDITIONS[rng.random_range(0..FALLBACK_CONDITIONS.len())];
    let wind_speed = 8.0 + rng.random_range(0.0..5.0);

    WeatherSnapshot {
        temperature,
        humidity,
        pressure,
        condition: condition.as_str().to_string(),
        description: FALLBACK_DESCRIPTION.to_string(),
        wind_speed,
        city: city.to_string(),
        country: COUNTRY_CODE.to_string(),
        lat: None,
        lon: None,
        source: DataSource::Fallback,
    }
}
