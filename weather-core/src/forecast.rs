use std::sync::Arc;

use chrono::{DateTime, Days, Local, TimeZone, Utc};
use rand::Rng;
use tracing::{info, instrument};

use crate::{
    cache::LocationCache,
    config::Config,
    fetcher::WeatherFetcher,
    model::{Fetched, ForecastBundle, Location, WeatherSnapshot},
    provider::{ProviderError, WeatherProvider, provider_from_config},
    random::Entropy,
    synth::predict_future_weather,
};

/// Builds forecast bundles from one current-weather lookup per request.
#[derive(Debug, Clone)]
pub struct ForecastService {
    fetcher: WeatherFetcher,
    entropy: Entropy,
}

impl ForecastService {
    pub fn new(provider: Arc<dyn WeatherProvider>, cache: LocationCache, entropy: Entropy) -> Self {
        Self {
            fetcher: WeatherFetcher::new(provider, cache, entropy.clone()),
            entropy,
        }
    }

    /// Wire up the live provider, cache and random source described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let provider: Arc<dyn WeatherProvider> = Arc::from(provider_from_config(config)?);
        let cache = LocationCache::new(&config.cache);
        let entropy = Entropy::from_seed_option(config.forecast.seed);

        Ok(Self::new(provider, cache, entropy))
    }

    pub async fn current_weather(&self, city: &str, country: &str) -> Fetched {
        self.fetcher.get_current_weather(city, country).await
    }

    pub async fn generate_forecast(&self, city: &str, country: &str, days: u32) -> ForecastBundle {
        self.generate_forecast_at(city, country, days, Utc::now()).await
    }

    /// As [`generate_forecast`](Self::generate_forecast), with an explicit clock.
    #[instrument(skip(self, now))]
    pub async fn generate_forecast_at(
        &self,
        city: &str,
        country: &str,
        days: u32,
        now: DateTime<Utc>,
    ) -> ForecastBundle {
        let current = self.fetcher.get_current_weather(city, country).await;
        let source = current.snapshot().source;

        let local_now = now.with_timezone(&Local);
        let bundle = self
            .entropy
            .with(|rng| build_bundle(current.into_snapshot(), days, local_now, rng));

        info!(%source, days = bundle.forecasts.len(), "Forecast generated");
        bundle
    }
}

/// Project `current` over `days` days starting today, the calendar date of
/// `now` in its own timezone.
///
/// Every day is computed from the same reading.
pub fn build_bundle<Tz: TimeZone, R: Rng + ?Sized>(
    current: WeatherSnapshot,
    days: u32,
    now: DateTime<Tz>,
    rng: &mut R,
) -> ForecastBundle {
    let today = now.date_naive();

    let forecasts = (0..u64::from(days))
        .map_while(|i| today.checked_add_days(Days::new(i)))
        .map(|date| predict_future_weather(date, today, &current, &mut *rng))
        .collect();

    ForecastBundle {
        location: Location::of(&current),
        data_source: current.source,
        current_weather: current,
        forecasts,
        generated_at: now.with_timezone(&Utc),
    }
}
