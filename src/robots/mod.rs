//! Robots.txt handling module
//!
//! Fetches and wraps a site's robots.txt ruleset. The policy is initialized
//! once per crawl job from `/robots.txt` resolved against the seed; a fetch or
//! parse failure is never fatal and degrades to allow-all.

mod policy;

pub use policy::RobotsPolicy;

use reqwest::Client;
use url::Url;

/// Fetches the robots policy for the site the seed belongs to
///
/// Resolves `/robots.txt` against `seed` and downloads it with the crawl's
/// HTTP client. Failure of any kind (unresolvable URL, transport error,
/// non-2xx status, undecodable body) fails open: the returned policy allows
/// everything, and the condition is only logged.
pub async fn robots_policy_for(client: &Client, seed: &Url) -> RobotsPolicy {
    let robots_url = match seed.join("/robots.txt") {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!("Cannot resolve robots.txt against {}: {}", seed, e);
            return RobotsPolicy::allow_all();
        }
    };

    match client.get(robots_url.as_str()).send().await {
        Ok(response) if response.status().is_success() => match response.text().await {
            Ok(body) => {
                tracing::debug!("Loaded robots.txt from {}", robots_url);
                RobotsPolicy::from_content(&body)
            }
            Err(e) => {
                tracing::warn!("Failed to read robots.txt body from {}: {}", robots_url, e);
                RobotsPolicy::allow_all()
            }
        },
        Ok(response) => {
            tracing::info!(
                "robots.txt at {} returned HTTP {}, allowing all",
                robots_url,
                response.status()
            );
            RobotsPolicy::allow_all()
        }
        Err(e) => {
            tracing::warn!("Failed to fetch robots.txt from {}: {}", robots_url, e);
            RobotsPolicy::allow_all()
        }
    }
}
