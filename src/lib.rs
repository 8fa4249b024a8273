//! SiteHarvest: a polite single-site crawler and content extractor
//!
//! This crate crawls one website breadth-first from a seed URL, staying inside
//! the seed's domain, and turns every fetched page into a normalized record of
//! flattened text plus structured fields (headings, tables, forms, emails and
//! so on). Script-heavy pages are routed to a headless-Chrome renderer, plain
//! documents to an HTTP fetch.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod fetch;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Fatal errors surfaced to the caller of a crawl
///
/// Per-page fetch failures never show up here; they are recovered inside the
/// crawl loop. Only conditions that prevent the crawl from starting at all
/// abort a job.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Recoverable failure while fetching a single page
///
/// The crawl loop logs these, skips the page, and moves on to the next
/// frontier entry.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Render failure for {url}: {message}")]
    Render { url: String, message: String },
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::crawl;
pub use extract::{Link, PageRecord, StructuredData};
pub use url::{extract_domain, normalize_link};
