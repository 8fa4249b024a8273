//! Fetch collaborators
//!
//! Two ways of turning a URL into a [`PageRecord`]: a plain HTTP document
//! fetch, and a headless-browser render for script-driven pages. The crawl
//! core only sees the [`PageFetcher`] trait, so tests (and embedders) can
//! substitute their own fetchers.

mod browser;
mod http;

pub use browser::{fetch_rendered_page, Interaction, RenderSettings};
pub use http::{build_http_client, fetch_static_page};

use crate::config::FetchConfig;
use crate::extract::PageRecord;
use crate::FetchError;
use async_trait::async_trait;
use reqwest::Client;

/// The fetch seam consumed by the crawl core
///
/// Both operations are fallible per page; a failure is always local to the
/// URL being fetched and never poisons shared state.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Document-only fetch and extraction
    async fn fetch_static(&self, url: &str) -> Result<PageRecord, FetchError>;

    /// Script-executed fetch and extraction
    async fn fetch_rendered(&self, url: &str) -> Result<PageRecord, FetchError>;
}

/// Default fetcher stack: reqwest for documents, headless Chrome for
/// script-heavy pages
pub struct WebFetcher {
    client: Client,
    render: RenderSettings,
}

impl WebFetcher {
    pub fn new(client: Client, config: &FetchConfig) -> Self {
        Self {
            client,
            render: RenderSettings::from_config(config),
        }
    }
}

#[async_trait]
impl PageFetcher for WebFetcher {
    async fn fetch_static(&self, url: &str) -> Result<PageRecord, FetchError> {
        fetch_static_page(&self.client, url).await
    }

    async fn fetch_rendered(&self, url: &str) -> Result<PageRecord, FetchError> {
        // The crawl loop renders without scripted interactions; embedders
        // wanting interaction sequences call fetch_rendered_page directly.
        fetch_rendered_page(url, &self.render, &[]).await
    }
}
