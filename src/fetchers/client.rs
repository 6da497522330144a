//! HTTP-backed [`TravelDataSource`]

use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{info, warn};

use super::{TravelDataSource, photos, weather, wikivoyage};
use crate::config::ApisConfig;
use crate::{Result, TravelPlannerError};

/// Talks to wttr.in, Pixabay and Wikivoyage
pub struct TravelApiClient {
    client: Client,
    config: ApisConfig,
}

impl TravelApiClient {
    /// Create a new client. Each request applies its own timeout from `config`.
    pub fn new(config: ApisConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("TripPlanner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TravelPlannerError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl TravelDataSource for TravelApiClient {
    async fn weather(&self, city: &str) -> Result<String> {
        let start_time = Instant::now();
        let report = weather::fetch_report(
            &self.client,
            &self.config.weather_base_url,
            city,
            self.config.weather_timeout(),
        )
        .await?;
        info!(
            "Retrieved weather for '{}' in {:.3}s",
            city,
            start_time.elapsed().as_secs_f64()
        );
        Ok(report)
    }

    async fn photos(&self, city: &str) -> Result<Vec<String>> {
        photos::fetch_photos(
            &self.client,
            &self.config.pixabay_url,
            self.config.pixabay_key.as_deref(),
            city,
            self.config.photo_timeout(),
        )
        .await
    }

    async fn city_summary(&self, city: &str) -> Result<String> {
        let start_time = Instant::now();
        let summary = wikivoyage::fetch_summary(
            &self.client,
            &self.config.wikivoyage_url,
            city,
            self.config.summary_timeout(),
        )
        .await?;

        let elapsed = start_time.elapsed();
        if elapsed > self.config.summary_timeout() / 2 {
            warn!(
                "Slow Wikivoyage response for '{}': {:.3}s",
                city,
                elapsed.as_secs_f64()
            );
        }
        Ok(summary)
    }
}
