//! Human-readable rendering of weather data.

use chrono::Local;
use weather_core::{DataSource, Fetched, ForecastBundle, LocationEntry, WeatherSnapshot};

pub fn print_current(fetched: &Fetched) {
    let w = fetched.snapshot();
    println!("{}", heading(w));
    println!("  {}", describe(w));
    println!(
        "  Humidity: {:.0}%  Pressure: {:.0} hPa  Wind: {:.1}",
        w.humidity, w.pressure, w.wind_speed
    );

    if let Some(reason) = fetched.reason() {
        println!("  (live data unavailable: {reason})");
    }
}

pub fn print_forecast(bundle: &ForecastBundle) {
    let w = &bundle.current_weather;
    println!("{}", heading(w));
    println!("  Now: {}", describe(w));
    println!();
    println!(
        "  {:<10}  {:>6}  {:<13}  {:>8}  {:>9}  {:>5}",
        "Date", "Temp", "Condition", "Humidity", "Pressure", "Wind"
    );

    for day in &bundle.forecasts {
        println!(
            "  {:<10}  {:>5.1}°  {:<13}  {:>7.0}%  {:>9.0}  {:>5.1}",
            day.date.format("%Y-%m-%d").to_string(),
            day.temperature,
            day.condition.as_str(),
            day.humidity,
            day.pressure,
            day.wind_speed,
        );
    }

    println!();
    let generated = bundle.generated_at.with_timezone(&Local);
    println!("  Generated at {}", generated.format("%Y-%m-%d %H:%M %Z"));
}

pub fn print_locations(locations: &[LocationEntry]) {
    if locations.is_empty() {
        println!("No matching cities.");
        return;
    }

    for location in locations {
        println!(
            "{}, {} ({})",
            location.city, location.country_name, location.country
        );
    }
}

fn heading(w: &WeatherSnapshot) -> String {
    let tag = match w.source {
        DataSource::Api => "live",
        DataSource::Fallback => "simulated",
    };
    format!("{}, {} [{tag}]", w.city, w.country)
}

fn describe(w: &WeatherSnapshot) -> String {
    format!("{:.1}°C, {} ({})", w.temperature, w.condition, w.description)
}
