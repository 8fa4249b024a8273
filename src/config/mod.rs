//! Configuration module for SiteHarvest
//!
//! Loads, parses, and validates TOML configuration files. Every field
//! defaults, so the CLI runs without a file; a provided file only has to name
//! what it wants to change.
//!
//! # Example
//!
//! ```no_run
//! use siteharvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Page budget: {}", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ClassifierConfig, Config, CrawlerConfig, FetchConfig};

// Re-export parser and validation entry points
pub use parser::load_config;
pub use validation::validate;
