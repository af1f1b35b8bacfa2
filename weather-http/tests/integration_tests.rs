//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::http::{HeaderValue, header};
use axum_test::TestServer;
use serde_json::{Value, json};
use weather_core::{
    Config, DataSource, Entropy, ForecastService, LocationCache, ProviderError, WeatherProvider,
    WeatherSnapshot,
};
use weather_http::{AppState, create_router};

/// Provider that either answers with a fixed reading or is "down".
#[derive(Debug, Default)]
struct MockProvider {
    down: bool,
    calls: AtomicUsize,
}

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn current_weather(
        &self,
        city: &str,
        country: &str,
    ) -> Result<WeatherSnapshot, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.down {
            return Err(ProviderError::Malformed("provider is down".to_string()));
        }

        Ok(WeatherSnapshot {
            temperature: 33.0,
            humidity: 58.0,
            pressure: 1006.0,
            condition: "clear".to_string(),
            description: "clear sky".to_string(),
            wind_speed: 4.6,
            city: city.to_string(),
            country: country.to_string(),
            lat: Some(28.66),
            lon: Some(77.23),
            source: DataSource::Api,
        })
    }
}

fn create_server_with(provider: Arc<MockProvider>, config: Config) -> TestServer {
    let service = ForecastService::new(provider, LocationCache::default(), Entropy::seeded(17));
    let router = create_router(AppState::new(service, config));
    TestServer::new(router).expect("Failed to create test server")
}

fn create_server(down: bool) -> (TestServer, Arc<MockProvider>) {
    let provider = Arc::new(MockProvider {
        down,
        ..MockProvider::default()
    });
    let mut config = Config::default();
    config.set_api_key("TEST_KEY".to_string());
    config.forecast.max_days = 30;

    (create_server_with(provider.clone(), config), provider)
}

// ============================================================================
// Health & landing page
// ============================================================================

#[tokio::test]
async fn health_reports_api_configuration() {
    let (server, _) = create_server(false);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["api_configured"], true);
    assert_eq!(body["location_scope"], "India only");
}

#[tokio::test]
async fn health_without_api_key() {
    let server = create_server_with(Arc::new(MockProvider::default()), Config::default());

    let body: Value = server.get("/health").await.json();
    assert_eq!(body["api_configured"], false);
}

#[tokio::test]
async fn index_serves_html() {
    let (server, _) = create_server(false);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("<h1>Weather Forecast</h1>"));
}

// ============================================================================
// Current weather
// ============================================================================

#[tokio::test]
async fn current_weather_live() {
    let (server, provider) = create_server(false);

    let response = server
        .post("/api/weather/current")
        .json(&json!({ "city": "Delhi" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["weather"]["city"], "Delhi");
    assert_eq!(body["weather"]["country"], "IN");
    assert_eq!(body["weather"]["source"], "api");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn current_weather_is_cached_between_requests() {
    let (server, provider) = create_server(false);

    let first: Value = server
        .post("/api/weather/current")
        .json(&json!({ "city": "Delhi" }))
        .await
        .json();
    let second: Value = server
        .post("/api/weather/current")
        .json(&json!({ "city": "Delhi" }))
        .await
        .json();

    assert_eq!(first, second);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn current_weather_defaults_to_mumbai() {
    let (server, _) = create_server(false);

    let body: Value = server.post("/api/weather/current").json(&json!({})).await.json();

    assert_eq!(body["success"], true);
    assert_eq!(body["weather"]["city"], "Mumbai");
}

#[tokio::test]
async fn current_weather_empty_body_uses_defaults() {
    let (server, _) = create_server(false);

    let body: Value = server.post("/api/weather/current").await.json();

    assert_eq!(body["success"], true);
    assert_eq!(body["weather"]["city"], "Mumbai");
}

#[tokio::test]
async fn current_weather_falls_back_when_provider_down() {
    let (server, _) = create_server(true);

    let response = server
        .post("/api/weather/current")
        .json(&json!({ "city": "Kolkata" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["weather"]["source"], "fallback");
    assert_eq!(body["weather"]["description"], "simulated data");
    assert!(body["weather"].get("lat").is_none());
}

#[tokio::test]
async fn malformed_body_is_reported_with_ok_status() {
    let (server, _) = create_server(false);

    let response = server.post("/api/weather/current").text("{not json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(
        body["error"]
            .as_str()
            .expect("error message")
            .contains("Invalid request body")
    );
}

// ============================================================================
// Forecast
// ============================================================================

#[tokio::test]
async fn forecast_returns_requested_days() {
    let (server, _) = create_server(false);

    let response = server
        .post("/api/weather/forecast")
        .json(&json!({ "city": "Delhi", "days": 3 }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);

    let forecast = &body["forecast"];
    assert_eq!(forecast["data_source"], "api");
    assert_eq!(forecast["location"]["city"], "Delhi");
    assert_eq!(forecast["location"]["coordinates"]["lat"], 28.66);
    assert!(forecast["generated_at"].is_string());

    let days = forecast["forecasts"].as_array().expect("forecasts array");
    assert_eq!(days.len(), 3);
    for day in days {
        let humidity = day["humidity"].as_f64().expect("humidity");
        let pressure = day["pressure"].as_f64().expect("pressure");
        assert!((30.0..=90.0).contains(&humidity));
        assert!((1000.0..=1020.0).contains(&pressure));
        assert!(day["date"].as_str().expect("date").len() == 10);
    }
}

#[tokio::test]
async fn forecast_defaults_to_seven_days() {
    let (server, _) = create_server(false);

    let body: Value = server.post("/api/weather/forecast").json(&json!({})).await.json();

    assert_eq!(body["forecast"]["forecasts"].as_array().map(Vec::len), Some(7));
    assert_eq!(body["forecast"]["location"]["city"], "Mumbai");
}

#[tokio::test]
async fn forecast_accepts_numeric_string_days() {
    let (server, _) = create_server(false);

    let body: Value = server
        .post("/api/weather/forecast")
        .json(&json!({ "city": "Pune", "days": "2" }))
        .await
        .json();

    assert_eq!(body["forecast"]["forecasts"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn forecast_with_zero_days_is_empty() {
    let (server, _) = create_server(false);

    let body: Value = server
        .post("/api/weather/forecast")
        .json(&json!({ "days": 0 }))
        .await
        .json();

    assert_eq!(body["success"], true);
    assert_eq!(body["forecast"]["forecasts"], json!([]));
}

#[tokio::test]
async fn forecast_rejects_bad_days() {
    let (server, provider) = create_server(false);

    for days in [json!("soon"), json!(-2), json!(31)] {
        let response = server
            .post("/api/weather/forecast")
            .json(&json!({ "city": "Pune", "days": days }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], false, "days = {days}");
        assert!(body["error"].as_str().expect("error").starts_with("Invalid days"));
    }

    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn forecast_falls_back_when_provider_down() {
    let (server, _) = create_server(true);

    let body: Value = server
        .post("/api/weather/forecast")
        .json(&json!({ "city": "Chennai", "days": 3 }))
        .await
        .json();

    assert_eq!(body["success"], true);
    assert_eq!(body["forecast"]["data_source"], "fallback");
    assert_eq!(body["forecast"]["location"]["coordinates"], json!({ "lat": 0.0, "lon": 0.0 }));

    let allowed = ["sunny", "cloudy", "partly cloudy", "rainy"];
    for day in body["forecast"]["forecasts"].as_array().expect("forecasts") {
        assert!(allowed.contains(&day["condition"].as_str().expect("condition")));
    }
}

// ============================================================================
// Location search
// ============================================================================

#[tokio::test]
async fn search_filters_cities() {
    let (server, _) = create_server(false);

    let response = server
        .get("/api/locations/search")
        .add_query_param("q", "bad")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["locations"],
        json!([
            { "city": "Hyderabad", "country": "IN", "country_name": "India" },
            { "city": "Ahmedabad", "country": "IN", "country_name": "India" }
        ])
    );
}

#[tokio::test]
async fn search_without_query_lists_all_cities() {
    let (server, _) = create_server(false);

    let body: Value = server.get("/api/locations/search").await.json();

    assert_eq!(body["locations"].as_array().map(Vec::len), Some(10));
    assert_eq!(body["locations"][0]["city"], "Mumbai");
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn cors_allows_any_origin() {
    let (server, _) = create_server(false);

    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://example.com"))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
