//! Trip planner service
//!
//! Aggregates everything the form shows for one request: the photo
//! gallery, the map embed, the packing list and the itinerary.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::PlannerConfig;
use crate::fetchers::{Fetchers, TravelApiClient, TravelDataSource};
use crate::itinerary::{TripRequest, compose_itinerary};
use crate::packing::generate_packing_list;
use crate::Result;

/// Everything rendered for one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    pub photos: Vec<String>,
    pub map_embed: String,
    pub packing_list: String,
    pub itinerary: String,
    pub generated_at: DateTime<Utc>,
}

/// Map iframe for `city`. The name is inserted verbatim.
#[must_use]
pub fn map_embed(city: &str) -> String {
    format!(
        r#"<iframe width="100%" height="300" src="https://maps.google.com/maps?q={city}&output=embed"></iframe>"#
    )
}

/// Stateless request handler over a shared set of fetchers
pub struct TripPlanner {
    fetchers: Fetchers,
}

impl TripPlanner {
    #[must_use]
    pub fn new(source: Arc<dyn TravelDataSource>, summary_capacity: usize) -> Self {
        Self {
            fetchers: Fetchers::new(source, summary_capacity),
        }
    }

    /// Planner backed by the real public APIs
    pub fn from_config(config: &PlannerConfig) -> Result<Self> {
        let client = TravelApiClient::new(config.apis.clone())?;
        Ok(Self::new(
            Arc::new(client),
            config.cache.city_summary_capacity,
        ))
    }

    #[must_use]
    pub fn fetchers(&self) -> &Fetchers {
        &self.fetchers
    }

    /// Build the full plan. Only invalid input is an error; external
    /// failures show up as fallback content.
    #[instrument(skip(self), fields(city = %request.city))]
    pub async fn plan(&self, request: &TripRequest) -> Result<TripPlan> {
        request.validate()?;

        let photos = self.fetchers.photos(&request.city).await;
        let map_embed = map_embed(&request.city);
        // The panel and the itinerary share one packing list, so the weather
        // is fetched once for the header and once for the packing list.
        let weather = self.fetchers.weather_line(&request.city).await;
        let packing_list = generate_packing_list(&self.fetchers, &request.city, request.days).await;
        let itinerary = compose_itinerary(request, &weather, &packing_list)?;

        info!(
            "Planned {}-day trip to {} with {} photos",
            request.days,
            request.city,
            photos.len()
        );

        Ok(TripPlan {
            photos,
            map_embed,
            packing_list,
            itinerary,
            generated_at: Utc::now(),
        })
    }

    /// Short description of `city`, memoized
    pub async fn city_summary(&self, city: &str) -> String {
        self.fetchers.city_summary(city).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::stub::StubSource;
    use crate::fetchers::{WEATHER_FALLBACK, fallback_photos};

    #[test]
    fn test_map_embed_is_unescaped() {
        assert_eq!(
            map_embed("New York"),
            r#"<iframe width="100%" height="300" src="https://maps.google.com/maps?q=New York&output=embed"></iframe>"#
        );
    }

    #[tokio::test]
    async fn test_plan_with_all_services_down() {
        let planner = TripPlanner::new(Arc::new(StubSource::default()), 50);
        let request = TripRequest::new("Paris", 2500.0, 5, &["Food 🍜", "Culture 🏛️"]);

        let plan = planner.plan(&request).await.unwrap();
        assert_eq!(plan.photos, fallback_photos());
        assert!(plan.map_embed.contains("q=Paris&output=embed"));
        assert!(plan.packing_list.starts_with("🧳 Pack for 5 days in Paris:"));
        assert!(plan.itinerary.contains(WEATHER_FALLBACK));
        assert!(plan.itinerary.contains(&plan.packing_list));
    }

    #[tokio::test]
    async fn test_plan_rejects_empty_interests() {
        let planner = TripPlanner::new(Arc::new(StubSource::default()), 50);
        let request = TripRequest::new("Paris", 2500.0, 5, &[]);
        let err = planner.plan(&request).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_weather_is_fetched_twice_per_plan() {
        let source = Arc::new(StubSource::with_weather("Clear +20°C"));
        let planner = TripPlanner::new(source.clone(), 50);
        let request = TripRequest::new("Tokyo", 3000.0, 7, &["Food 🍜"]);

        planner.plan(&request).await.unwrap();
        assert_eq!(
            source
                .weather_calls
                .load(std::sync::atomic::Ordering::SeqCst),
            2
        );
    }
}
