//! Scope filter: decides whether a candidate URL may enter the frontier

use crate::robots::RobotsPolicy;
use std::collections::HashSet;
use url::Url;

/// File extensions that never lead to crawlable documents.
const SKIP_EXTENSIONS: &[&str] = &[
    ".pdf", ".jpg", ".jpeg", ".png", ".gif", ".css", ".js", ".zip", ".tar", ".gz", ".mp3", ".mp4",
    ".avi", ".mov",
];

/// Per-job crawl eligibility policy
///
/// Pure given the visited set passed to [`ScopeFilter::should_crawl`]; the
/// filter itself holds only the immutable policy fields of the job.
#[derive(Debug)]
pub struct ScopeFilter {
    domain_scope: String,
    robots: RobotsPolicy,
    respect_robots: bool,
}

impl ScopeFilter {
    pub fn new(domain_scope: String, robots: RobotsPolicy, respect_robots: bool) -> Self {
        Self {
            domain_scope,
            robots,
            respect_robots,
        }
    }

    /// Decides whether a canonical URL should be crawled
    ///
    /// Rejects any URL that is not http(s), was already visited, lives on a
    /// host other than the job's domain scope (exact match, no subdomain
    /// folding), is disallowed by robots when enabled, or names a
    /// non-document file extension. The checks are independent; the order
    /// only short-circuits the cheap ones first.
    pub fn should_crawl(&self, url: &str, visited: &HashSet<String>) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return false;
        }

        if visited.contains(url) {
            return false;
        }

        match parsed.host_str() {
            Some(host) if host == self.domain_scope => {}
            _ => return false,
        }

        if self.respect_robots && !self.robots.is_allowed(url) {
            return false;
        }

        let lowered = url.to_lowercase();
        if SKIP_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
            return false;
        }

        true
    }
}
