//! Static HTTP fetcher
//!
//! Plain document fetch: GET the URL, require a success status, and hand the
//! body to the extraction step.

use crate::config::FetchConfig;
use crate::extract::{extract_page, PageRecord};
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used for page and robots.txt fetches
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL as a static document and extracts its record
///
/// Any transport failure or non-2xx status is a [`FetchError`]; the caller
/// decides whether that is fatal (it never is inside the crawl loop).
pub async fn fetch_static_page(client: &Client, url: &str) -> Result<PageRecord, FetchError> {
    let response = client.get(url).send().await.map_err(|e| FetchError::Http {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|e| FetchError::Http {
        url: url.to_string(),
        source: e,
    })?;

    Ok(extract_page(&body, url))
}
