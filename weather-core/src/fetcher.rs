use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    cache::{CacheKey, LocationCache},
    fallback::get_fallback_weather,
    model::Fetched,
    provider::WeatherProvider,
    random::Entropy,
};

/// Current-weather lookup: cache first, then the live provider, then synthetic
/// data.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    provider: Arc<dyn WeatherProvider>,
    cache: LocationCache,
    entropy: Entropy,
}

impl WeatherFetcher {
    pub fn new(provider: Arc<dyn WeatherProvider>, cache: LocationCache, entropy: Entropy) -> Self {
        Self {
            provider,
            cache,
            entropy,
        }
    }

    /// Current weather for `city`, never failing.
    ///
    /// Live readings are cached under `city_country`. When the provider is
    /// unusable a fresh synthetic reading is returned and nothing is cached.
    #[instrument(skip(self))]
    pub async fn get_current_weather(&self, city: &str, country: &str) -> Fetched {
        let key = CacheKey::new(city, country);

        if let Some(hit) = self.cache.get(&key).await {
            debug!(key = %key, "Location cache hit");
            return Fetched::Live(hit);
        }

        let fetch = self.provider.current_weather(city, country);
        match self.cache.get_or_try_fetch(key, fetch).await {
            Ok(snapshot) => Fetched::Live(snapshot),
            Err(reason) => {
                warn!(error = %reason, "Live weather unavailable, using simulated data");
                let snapshot = self.entropy.with(|rng| get_fallback_weather(city, rng));
                Fetched::Degraded { snapshot, reason }
            }
        }
    }

    pub fn cache(&self) -> &LocationCache {
        &self.cache
    }
}
