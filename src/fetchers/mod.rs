//! External data fetchers
//!
//! Weather, photo and city summary lookups against public APIs. Sources
//! report failures through [`Result`]; [`Fetchers`] is the one place where a
//! failure is logged and swapped for the documented fallback value, so
//! nothing above this layer ever sees an external error.

pub mod client;
pub mod photos;
pub mod weather;
pub mod wikivoyage;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use crate::Result;
use crate::cache::LruCache;

pub use client::TravelApiClient;

/// Weather line used when the weather service cannot be reached
pub const WEATHER_FALLBACK: &str = "⛅ Weather data unavailable";

/// Gallery shown when the photo search fails or finds nothing
pub const FALLBACK_PHOTOS: [&str; 2] = [
    "https://cdn.pixabay.com/photo/2016/11/22/23/44/porsche-1851246_640.jpg",
    "https://cdn.pixabay.com/photo/2014/08/15/11/29/beach-418742_640.jpg",
];

/// Raw access to the external services
#[async_trait]
pub trait TravelDataSource: Send + Sync {
    /// Short condition report, e.g. `Partly cloudy +18°C`
    async fn weather(&self, city: &str) -> Result<String>;

    /// Up to three image URLs
    async fn photos(&self, city: &str) -> Result<Vec<String>>;

    /// Truncated descriptive text about the city
    async fn city_summary(&self, city: &str) -> Result<String>;
}

/// Best-effort front for a [`TravelDataSource`]
pub struct Fetchers {
    source: Arc<dyn TravelDataSource>,
    summaries: Mutex<LruCache<String, String>>,
}

impl Fetchers {
    /// Wrap `source`, memoizing up to `summary_capacity` city summaries
    #[must_use]
    pub fn new(source: Arc<dyn TravelDataSource>, summary_capacity: usize) -> Self {
        Self {
            source,
            summaries: Mutex::new(LruCache::new(summary_capacity)),
        }
    }

    /// Weather line for display. Never fails.
    #[instrument(skip(self))]
    pub async fn weather_line(&self, city: &str) -> String {
        match self.source.weather(city).await {
            Ok(report) => format!("☁️ {report}"),
            Err(e) => {
                warn!("Weather lookup failed for '{}': {}", city, e);
                WEATHER_FALLBACK.to_string()
            }
        }
    }

    /// Photo URLs for the gallery. Never empty.
    #[instrument(skip(self))]
    pub async fn photos(&self, city: &str) -> Vec<String> {
        match self.source.photos(city).await {
            Ok(photos) if !photos.is_empty() => photos,
            Ok(_) => {
                debug!("No photos found for '{}', using stock images", city);
                fallback_photos()
            }
            Err(e) => {
                warn!("Photo search failed for '{}': {}", city, e);
                fallback_photos()
            }
        }
    }

    /// City summary, served from the LRU cache when possible
    #[instrument(skip(self))]
    pub async fn city_summary(&self, city: &str) -> String {
        let key = city.to_string();
        if let Some(summary) = self.summaries.lock().await.get(&key) {
            debug!("City summary cache hit");
            return summary;
        }

        match self.source.city_summary(city).await {
            Ok(summary) => {
                self.summaries.lock().await.put(key, summary.clone());
                summary
            }
            Err(e) => {
                warn!("City summary lookup failed for '{}': {}", city, e);
                fallback_summary(city)
            }
        }
    }

    /// Number of memoized city summaries
    pub async fn cached_summaries(&self) -> usize {
        self.summaries.lock().await.len()
    }
}

#[must_use]
pub fn fallback_photos() -> Vec<String> {
    FALLBACK_PHOTOS.iter().map(|url| (*url).to_string()).collect()
}

#[must_use]
pub fn fallback_summary(city: &str) -> String {
    format!("{city} is a vibrant destination with rich culture and attractions.")
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::stub::StubSource;
    use super::*;

    #[tokio::test]
    async fn test_weather_line_success_and_fallback() {
        let fetchers = Fetchers::new(Arc::new(StubSource::with_weather("Sunny +25°C")), 50);
        assert_eq!(fetchers.weather_line("Paris").await, "☁️ Sunny +25°C");

        let offline = Fetchers::new(Arc::new(StubSource::default()), 50);
        assert_eq!(offline.weather_line("Paris").await, WEATHER_FALLBACK);
    }

    #[tokio::test]
    async fn test_photos_fall_back_on_error_and_empty() {
        let offline = Fetchers::new(Arc::new(StubSource::default()), 50);
        assert_eq!(offline.photos("Paris").await, fallback_photos());

        let empty = Fetchers::new(
            Arc::new(StubSource {
                photos: Some(vec![]),
                ..StubSource::default()
            }),
            50,
        );
        assert_eq!(empty.photos("Paris").await.len(), 2);

        let found = Fetchers::new(
            Arc::new(StubSource {
                photos: Some(vec!["https://img/1.jpg".to_string()]),
                ..StubSource::default()
            }),
            50,
        );
        assert_eq!(found.photos("Paris").await, vec!["https://img/1.jpg"]);
    }

    #[tokio::test]
    async fn test_city_summary_is_memoized() {
        let source = Arc::new(StubSource {
            summary: Some("lovely".to_string()),
            ..StubSource::default()
        });
        let fetchers = Fetchers::new(source.clone(), 50);

        assert_eq!(fetchers.city_summary("Paris").await, "Paris: lovely");
        assert_eq!(fetchers.city_summary("Paris").await, "Paris: lovely");
        assert_eq!(source.summary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(fetchers.cached_summaries().await, 1);
    }

    #[tokio::test]
    async fn test_city_summary_cache_is_bounded() {
        let source = Arc::new(StubSource {
            summary: Some("ok".to_string()),
            ..StubSource::default()
        });
        let fetchers = Fetchers::new(source.clone(), 2);

        fetchers.city_summary("Paris").await;
        fetchers.city_summary("Tokyo").await;
        fetchers.city_summary("Rome").await;
        assert_eq!(fetchers.cached_summaries().await, 2);

        // Paris was evicted, so it is fetched again
        fetchers.city_summary("Paris").await;
        assert_eq!(source.summary_calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_city_summary_fallback_is_not_cached() {
        let source = Arc::new(StubSource::default());
        let fetchers = Fetchers::new(source.clone(), 50);

        assert_eq!(
            fetchers.city_summary("Lima").await,
            "Lima is a vibrant destination with rich culture and attractions."
        );
        fetchers.city_summary("Lima").await;
        assert_eq!(source.summary_calls.load(Ordering::SeqCst), 2);
        assert_eq!(fetchers.cached_summaries().await, 0);
    }
}
