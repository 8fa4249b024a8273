//! Rendered fetcher backed by headless Chrome
//!
//! For pages whose content only exists after script execution. Launches a
//! browser per fetch, navigates, waits for the page to settle, optionally
//! applies a scripted interaction sequence, and extracts the final DOM.
//!
//! The browser event handler runs on its own task and must be aborted once
//! the browser has shut down, or it lingers past the fetch.

use crate::config::FetchConfig;
use crate::extract::{extract_page, PageRecord};
use crate::FetchError;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use serde::Deserialize;
use std::fmt::Display;
use std::time::Duration;

/// How long a wait-for-selector step polls before giving up.
const SELECTOR_WAIT_ATTEMPTS: u32 = 50;
const SELECTOR_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Settings for the rendering browser
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// User agent the browser announces
    pub user_agent: String,

    /// Run without a visible window
    pub headless: bool,

    /// Extra settling time after navigation completes
    pub wait: Duration,
}

impl RenderSettings {
    pub fn from_config(config: &FetchConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            headless: config.headless,
            wait: Duration::from_secs(config.render_wait_seconds),
        }
    }
}

/// One scripted step applied to a rendered page before extraction
///
/// Deserializes from the `{"action": "...", ...}` shape, so interaction
/// scripts can be supplied as JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Interaction {
    /// Click the first element matching the selector
    Click { selector: String },

    /// Click and type into the first element matching the selector
    Fill { selector: String, value: String },

    /// Press a key on the matched element
    Press {
        #[serde(default = "default_press_selector")]
        selector: String,
        key: String,
    },

    /// Poll until the selector matches something
    WaitForSelector { selector: String },

    /// Pause for a fixed time
    Wait {
        #[serde(rename = "time")]
        seconds: f64,
    },

    /// Scroll to the bottom of the document
    ScrollToBottom,

    /// Scroll down by a pixel amount
    ScrollBy {
        #[serde(rename = "amount")]
        pixels: i64,
    },
}

fn default_press_selector() -> String {
    "body".to_string()
}

/// Fetches a URL with a headless browser and extracts its record
///
/// `interactions` are applied in order after navigation settles; an
/// interaction that cannot be applied fails the whole fetch, since the DOM
/// would not be the one the caller asked for.
pub async fn fetch_rendered_page(
    url: &str,
    settings: &RenderSettings,
    interactions: &[Interaction],
) -> Result<PageRecord, FetchError> {
    let mut builder = BrowserConfig::builder()
        .request_timeout(Duration::from_secs(30))
        .arg(format!("--user-agent={}", settings.user_agent));
    if !settings.headless {
        builder = builder.with_head();
    }
    let config = builder.build().map_err(|message| FetchError::Render {
        url: url.to_string(),
        message,
    })?;

    tracing::debug!("Launching rendering browser for {}", url);
    let (mut browser, mut handler) = Browser::launch(config)
        .await
        .map_err(|e| render_error(url, e))?;

    let handler_task = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(e) = event {
                tracing::debug!("Browser handler event error: {:?}", e);
            }
        }
    });

    let outcome = render_page(&browser, url, settings, interactions).await;

    if let Err(e) = browser.close().await {
        tracing::debug!("Browser close failed: {}", e);
    }
    let _ = browser.wait().await;
    handler_task.abort();

    outcome
}

async fn render_page(
    browser: &Browser,
    url: &str,
    settings: &RenderSettings,
    interactions: &[Interaction],
) -> Result<PageRecord, FetchError> {
    let page = browser
        .new_page(url)
        .await
        .map_err(|e| render_error(url, e))?;

    page.wait_for_navigation()
        .await
        .map_err(|e| render_error(url, e))?;

    if !settings.wait.is_zero() {
        tokio::time::sleep(settings.wait).await;
    }

    for interaction in interactions {
        apply_interaction(&page, interaction)
            .await
            .map_err(|message| FetchError::Render {
                url: url.to_string(),
                message,
            })?;
    }

    let html = page.content().await.map_err(|e| render_error(url, e))?;

    Ok(extract_page(&html, url))
}

async fn apply_interaction(page: &Page, interaction: &Interaction) -> Result<(), String> {
    match interaction {
        Interaction::Click { selector } => {
            let element = page
                .find_element(selector.as_str())
                .await
                .map_err(stringify)?;
            element.click().await.map_err(stringify)?;
        }
        Interaction::Fill { selector, value } => {
            let element = page
                .find_element(selector.as_str())
                .await
                .map_err(stringify)?;
            element.click().await.map_err(stringify)?;
            element.type_str(value).await.map_err(stringify)?;
        }
        Interaction::Press { selector, key } => {
            let element = page
                .find_element(selector.as_str())
                .await
                .map_err(stringify)?;
            element.press_key(key).await.map_err(stringify)?;
        }
        Interaction::WaitForSelector { selector } => {
            wait_for_selector(page, selector).await?;
        }
        Interaction::Wait { seconds } => {
            tokio::time::sleep(Duration::from_secs_f64(seconds.max(0.0))).await;
        }
        Interaction::ScrollToBottom => {
            page.evaluate("window.scrollTo(0, document.body.scrollHeight)")
                .await
                .map_err(stringify)?;
        }
        Interaction::ScrollBy { pixels } => {
            page.evaluate(format!("window.scrollBy(0, {})", pixels))
                .await
                .map_err(stringify)?;
        }
    }

    Ok(())
}

async fn wait_for_selector(page: &Page, selector: &str) -> Result<(), String> {
    for _ in 0..SELECTOR_WAIT_ATTEMPTS {
        if page.find_element(selector).await.is_ok() {
            return Ok(());
        }
        tokio::time::sleep(SELECTOR_POLL_INTERVAL).await;
    }
    Err(format!("selector '{}' never appeared", selector))
}

fn render_error(url: &str, e: impl Display) -> FetchError {
    FetchError::Render {
        url: url.to_string(),
        message: e.to_string(),
    }
}

fn stringify(e: impl Display) -> String {
    e.to_string()
}
