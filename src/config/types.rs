use serde::Deserialize;

/// Default user agent, matching what mainstream browsers send.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Marker tokens that suggest a URL serves a script-driven page.
const DEFAULT_SCRIPT_MARKERS: &[&str] = &["#", "vue", "react", "angular", "spa", "dashboard"];

/// Main configuration structure for SiteHarvest
///
/// Every section and field has a default, so a crawl can run with no config
/// file at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Crawl loop behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of pages to fetch
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: usize,

    /// Whether to honor the site's robots.txt
    #[serde(rename = "respect-robots", default)]
    pub respect_robots: bool,

    /// Lower bound of the politeness delay, in seconds
    #[serde(rename = "delay-min-seconds", default = "default_delay_min")]
    pub delay_min_seconds: f64,

    /// Upper bound of the politeness delay, in seconds
    #[serde(rename = "delay-max-seconds", default = "default_delay_max")]
    pub delay_max_seconds: f64,
}

/// Fetch collaborator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout for static fetches, in seconds
    #[serde(rename = "request-timeout-seconds", default = "default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Extra settling time after navigation when rendering, in seconds
    #[serde(rename = "render-wait-seconds", default = "default_render_wait")]
    pub render_wait_seconds: u64,

    /// Run the rendering browser headless
    #[serde(default = "default_headless")]
    pub headless: bool,
}

/// Script-heavy URL classifier configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Substrings that route a URL to the rendering fetcher
    #[serde(rename = "script-markers", default = "default_script_markers")]
    pub script_markers: Vec<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            respect_robots: false,
            delay_min_seconds: default_delay_min(),
            delay_max_seconds: default_delay_max(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout_seconds: default_request_timeout(),
            render_wait_seconds: default_render_wait(),
            headless: default_headless(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            script_markers: default_script_markers(),
        }
    }
}

fn default_max_pages() -> usize {
    100
}

fn default_delay_min() -> f64 {
    1.0
}

fn default_delay_max() -> f64 {
    3.0
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_render_wait() -> u64 {
    5
}

fn default_headless() -> bool {
    true
}

fn default_script_markers() -> Vec<String> {
    DEFAULT_SCRIPT_MARKERS.iter().map(|s| s.to_string()).collect()
}
