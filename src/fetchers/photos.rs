//! Pixabay city photo search

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{Result, TravelPlannerError};

/// Maximum number of photos shown in the gallery
pub const MAX_PHOTOS: usize = 3;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
}

/// Search Pixabay for horizontal photos of `city`
#[instrument(skip(client, endpoint, api_key, timeout))]
pub async fn fetch_photos(
    client: &Client,
    endpoint: &str,
    api_key: Option<&str>,
    city: &str,
    timeout: Duration,
) -> Result<Vec<String>> {
    let api_key =
        api_key.ok_or_else(|| TravelPlannerError::config("Pixabay API key not configured"))?;

    let query = format!("{city} city");
    let response: SearchResponse = client
        .get(endpoint)
        .query(&[
            ("key", api_key),
            ("q", query.as_str()),
            ("orientation", "horizontal"),
            ("per_page", "20"),
        ])
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let photos = first_photos(response);
    debug!("Pixabay returned {} usable photos", photos.len());
    Ok(photos)
}

/// Keep the first [`MAX_PHOTOS`] image URLs of a search response
#[must_use]
pub fn first_photos(response: SearchResponse) -> Vec<String> {
    response
        .hits
        .into_iter()
        .map(|hit| hit.webformat_url)
        .filter(|url| !url.is_empty())
        .take(MAX_PHOTOS)
        .collect()
}
