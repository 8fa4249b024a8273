use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use siteharvest::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Page budget: {}", config.crawler.max_pages);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[crawler]
max-pages = 25
respect-robots = true
delay-min-seconds = 0.5
delay-max-seconds = 2.0

[fetch]
user-agent = "TestAgent/1.0"
request-timeout-seconds = 10
render-wait-seconds = 2
headless = true

[classifier]
script-markers = ["spa", "app"]
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_pages, 25);
        assert!(config.crawler.respect_robots);
        assert_eq!(config.fetch.user_agent, "TestAgent/1.0");
        assert_eq!(config.classifier.script_markers, vec!["spa", "app"]);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_pages, 100);
        assert!(!config.crawler.respect_robots);
        assert!(config.fetch.headless);
        assert!(config
            .classifier
            .script_markers
            .contains(&"react".to_string()));
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let file = create_temp_config("[crawler]\nmax-pages = 5\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_pages, 5);
        assert_eq!(config.crawler.delay_min_seconds, 1.0);
        assert_eq!(config.crawler.delay_max_seconds, 3.0);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[crawler]\nmax-pages = 0\n");
        assert!(load_config(file.path()).is_err());
    }
}
