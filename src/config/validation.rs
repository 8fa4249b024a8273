use crate::config::types::{Config, CrawlerConfig, FetchConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_fetch_config(&config.fetch)?;
    Ok(())
}

/// Validates crawl loop configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.delay_min_seconds < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay_min_seconds must be >= 0, got {}",
            config.delay_min_seconds
        )));
    }

    if config.delay_max_seconds < config.delay_min_seconds {
        return Err(ConfigError::Validation(format!(
            "delay_max_seconds ({}) must be >= delay_min_seconds ({})",
            config.delay_max_seconds, config.delay_min_seconds
        )));
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_seconds < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_seconds must be >= 1, got {}",
            config.request_timeout_seconds
        )));
    }

    Ok(())
}
