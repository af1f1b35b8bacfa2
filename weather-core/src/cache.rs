use std::{fmt, sync::Arc, time::Duration};

use moka::future::Cache;

use crate::{config::CacheConfig, model::WeatherSnapshot};

/// Identifies one cached snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub city: String,
    pub country: String,
}

impl CacheKey {
    pub fn new(city: &str, country: &str) -> Self {
        Self {
            city: city.to_string(),
            country: country.to_string(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.city, self.country)
    }
}

/// Bounded, concurrent store of live snapshots keyed by city and country.
///
/// Concurrent misses for the same key share one fetch. Failed fetches leave
/// nothing behind, so the next lookup tries the provider again.
#[derive(Debug, Clone)]
pub struct LocationCache {
    inner: Cache<CacheKey, WeatherSnapshot>,
}

impl LocationCache {
    pub fn new(config: &CacheConfig) -> Self {
        let mut builder = Cache::builder().max_capacity(config.max_entries);
        if let Some(ttl) = config.ttl_secs {
            builder = builder.time_to_live(Duration::from_secs(ttl));
        }

        Self {
            inner: builder.build(),
        }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<WeatherSnapshot> {
        self.inner.get(key).await
    }

    pub async fn insert(&self, key: CacheKey, snapshot: WeatherSnapshot) {
        self.inner.insert(key, snapshot).await;
    }

    /// Return the cached snapshot for `key`, or run `fetch` and cache its
    /// success.
    pub async fn get_or_try_fetch<F, E>(
        &self,
        key: CacheKey,
        fetch: F,
    ) -> Result<WeatherSnapshot, Arc<E>>
    where
        F: Future<Output = Result<WeatherSnapshot, E>>,
        E: Send + Sync + 'static,
    {
        self.inner.try_get_with(key, fetch).await
    }
}

impl Default for LocationCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::model::DataSource;

    fn snapshot(temperature: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature,
            humidity: 60.0,
            pressure: 1010.0,
            condition: "clear".to_string(),
            description: "clear sky".to_string(),
            wind_speed: 3.0,
            city: "Pune".to_string(),
            country: "IN".to_string(),
            lat: Some(18.52),
            lon: Some(73.86),
            source: DataSource::Api,
        }
    }

    #[test]
    fn key_renders_city_and_country() {
        assert_eq!(CacheKey::new("Mumbai", "IN").to_string(), "Mumbai_IN");
    }

    #[tokio::test]
    async fn successful_fetch_is_stored() {
        let cache = LocationCache::default();
        let key = CacheKey::new("Pune", "IN");

        let fetched = cache
            .get_or_try_fetch(key.clone(), async { Ok::<_, String>(snapshot(25.0)) })
            .await
            .unwrap();

        assert_eq!(cache.get(&key).await, Some(fetched));
    }

    #[tokio::test]
    async fn failed_fetch_is_not_stored() {
        let cache = LocationCache::default();
        let key = CacheKey::new("Pune", "IN");

        let err = cache
            .get_or_try_fetch(key.clone(), async {
                Err::<WeatherSnapshot, _>("down".to_string())
            })
            .await
            .unwrap_err();

        assert_eq!(err.as_str(), "down");
        assert!(cache.get(&key).await.is_none());
    }

    #[tokio::test]
    async fn hit_skips_fetch() {
        let cache = LocationCache::default();
        let key = CacheKey::new("Pune", "IN");
        cache.insert(key.clone(), snapshot(25.0)).await;

        let calls = AtomicUsize::new(0);
        let got = cache
            .get_or_try_fetch(key, async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, String>(snapshot(99.0))
            })
            .await
            .unwrap();

        assert_eq!(got.temperature, 25.0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn keys_differ_by_country() {
        let cache = LocationCache::default();
        cache.insert(CacheKey::new("Delhi", "IN"), snapshot(30.0)).await;

        assert!(cache.get(&CacheKey::new("Delhi", "US")).await.is_none());
    }
}
