//! wttr.in weather lookup
//!
//! Asks for the one-line `%C %t` format (condition and temperature), e.g.
//! `Light rain +12°C`.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};

use crate::{Result, TravelPlannerError};

/// Fetch the current condition line for `city`
#[instrument(skip(client, base_url, timeout))]
pub async fn fetch_report(
    client: &Client,
    base_url: &str,
    city: &str,
    timeout: Duration,
) -> Result<String> {
    let url = report_url(base_url, city);
    debug!("wttr.in request URL: {}", url);

    let body = client
        .get(&url)
        .query(&[("format", "%C %t")])
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    parse_report(&body)
}

fn report_url(base_url: &str, city: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(city)
    )
}

/// Validate a raw wttr.in body and strip surrounding whitespace
pub fn parse_report(body: &str) -> Result<String> {
    let report = body.trim();
    if report.is_empty() {
        return Err(TravelPlannerError::api("Empty weather report"));
    }
    // wttr.in answers unknown locations with an HTML or "Unknown location" page
    if report.starts_with('<') || report.starts_with("Unknown location") {
        return Err(TravelPlannerError::api(format!(
            "Unexpected weather response: {}",
            report.chars().take(80).collect::<String>()
        )));
    }
    Ok(report.to_string())
}
