//! Wikivoyage city summaries via the MediaWiki extracts API

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::{Result, TravelPlannerError};

/// Characters of the intro extract kept in a summary
pub const SUMMARY_CHARS: usize = 500;
pub const SUMMARY_SUFFIX: &str = "... [read more on Wikivoyage]";

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub query: Query,
}

#[derive(Debug, Deserialize)]
pub struct Query {
    pub pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    pub title: Option<String>,
    pub extract: Option<String>,
}

/// Fetch the plain-text intro of the `city` article
#[instrument(skip(client, endpoint, timeout))]
pub async fn fetch_summary(
    client: &Client,
    endpoint: &str,
    city: &str,
    timeout: Duration,
) -> Result<String> {
    let response: QueryResponse = client
        .get(endpoint)
        .query(&[
            ("action", "query"),
            ("format", "json"),
            ("titles", city),
            ("prop", "extracts"),
            ("exintro", "1"),
            ("explaintext", "1"),
        ])
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    summarize(response)
}

/// Truncate the first page's extract and append the read-more suffix
pub fn summarize(response: QueryResponse) -> Result<String> {
    let page = response
        .query
        .pages
        .into_values()
        .next()
        .ok_or_else(|| TravelPlannerError::api("Wikivoyage returned no pages"))?;

    let extract = page.extract.ok_or_else(|| {
        TravelPlannerError::api(format!(
            "No Wikivoyage article for {}",
            page.title.as_deref().unwrap_or("requested title")
        ))
    })?;

    let mut summary: String = extract.chars().take(SUMMARY_CHARS).collect();
    summary.push_str(SUMMARY_SUFFIX);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> QueryResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_summarize_short_extract() {
        let summary = summarize(response(
            r#"{"batchcomplete": "", "query": {"pages": {"10384": {
                "pageid": 10384, "ns": 0, "title": "Paris",
                "extract": "Paris, the cosmopolitan capital of France."
            }}}}"#,
        ))
        .unwrap();
        assert_eq!(
            summary,
            "Paris, the cosmopolitan capital of France.... [read more on Wikivoyage]"
        );
    }

    #[test]
    fn test_summarize_truncates_by_characters() {
        let extract = "é".repeat(600);
        let json = format!(
            r#"{{"query": {{"pages": {{"1": {{"title": "X", "extract": "{extract}"}}}}}}}}"#
        );
        let summary = summarize(response(&json)).unwrap();
        assert!(summary.ends_with(SUMMARY_SUFFIX));
        assert_eq!(
            summary.chars().count(),
            SUMMARY_CHARS + SUMMARY_SUFFIX.chars().count()
        );
    }

    #[test]
    fn test_missing_article_is_an_error() {
        let result = summarize(response(
            r#"{"query": {"pages": {"-1": {"ns": 0, "title": "Atlantis", "missing": ""}}}}"#,
        ));
        assert!(result.unwrap_err().to_string().contains("Atlantis"));
    }
}
