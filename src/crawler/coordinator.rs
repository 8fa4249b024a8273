//! Crawl coordinator: the breadth-first loop over one site

use crate::config::Config;
use crate::crawler::dispatcher::{FetchDispatcher, UrlClassifier};
use crate::crawler::frontier::Frontier;
use crate::crawler::scope::ScopeFilter;
use crate::extract::PageRecord;
use crate::fetch::{build_http_client, PageFetcher, WebFetcher};
use crate::robots::{robots_policy_for, RobotsPolicy};
use crate::url::{extract_domain, normalize_link};
use crate::{CrawlError, Result};
use rand::Rng;
use std::time::Duration;
use url::Url;

/// Drives a breadth-first crawl of a single site
///
/// Owns the frontier, the scope policy, and the fetch dispatcher. Generic
/// over the fetcher so the loop can be exercised without any network.
pub struct Coordinator<F: PageFetcher> {
    frontier: Frontier,
    scope: ScopeFilter,
    dispatcher: FetchDispatcher<F>,
    page_budget: usize,
    delay_range: (f64, f64),
    results: Vec<PageRecord>,
}

impl<F: PageFetcher> Coordinator<F> {
    /// Builds a coordinator for one crawl job
    ///
    /// The seed must be an absolute URL with a host; it is canonicalized
    /// before seeding the frontier so re-spellings of the seed (trailing
    /// slash, fragment) dedup against links discovered later.
    pub fn new(
        seed: &str,
        config: &Config,
        fetcher: F,
        robots: RobotsPolicy,
    ) -> Result<Coordinator<F>> {
        let parsed = Url::parse(seed).map_err(|e| CrawlError::InvalidSeed {
            url: seed.to_string(),
            reason: e.to_string(),
        })?;

        let domain = extract_domain(&parsed).ok_or_else(|| CrawlError::InvalidSeed {
            url: seed.to_string(),
            reason: "URL has no host".to_string(),
        })?;

        let canonical_seed = normalize_link(seed, &parsed).map_err(|e| CrawlError::InvalidSeed {
            url: seed.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Coordinator {
            frontier: Frontier::seeded(&canonical_seed),
            scope: ScopeFilter::new(domain, robots, config.crawler.respect_robots),
            dispatcher: FetchDispatcher::new(
                fetcher,
                UrlClassifier::new(config.classifier.script_markers.clone()),
            ),
            page_budget: config.crawler.max_pages,
            delay_range: (
                config.crawler.delay_min_seconds,
                config.crawler.delay_max_seconds,
            ),
            results: Vec::new(),
        })
    }

    /// Runs the crawl to completion and returns the collected pages
    ///
    /// Stops when the frontier is exhausted or the page budget is reached.
    /// Failed fetches are logged and skipped; they consume neither budget
    /// nor politeness delay.
    pub async fn run(mut self) -> Vec<PageRecord> {
        while self.results.len() < self.page_budget {
            let Some(current) = self.frontier.pop() else {
                break;
            };
            self.frontier.mark_visited(&current);

            tracing::info!(
                "Crawling {} ({}/{})",
                current,
                self.results.len() + 1,
                self.page_budget
            );

            let record = match self.dispatcher.fetch(&current).await {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", current, e);
                    continue;
                }
            };

            self.enqueue_links(&current, &record);
            self.results.push(record);

            self.pause().await;
        }

        tracing::info!(
            "Crawl finished: {} pages collected, {} URLs visited",
            self.results.len(),
            self.frontier.visited_count()
        );

        self.results
    }

    /// Canonicalizes a page's outgoing links and queues the in-scope ones
    fn enqueue_links(&mut self, current: &str, record: &PageRecord) {
        let Ok(base) = Url::parse(current) else {
            return;
        };

        for link in &record.links {
            let Ok(candidate) = normalize_link(&link.href, &base) else {
                tracing::debug!("Dropping malformed link '{}' on {}", link.href, current);
                continue;
            };
            if self.scope.should_crawl(&candidate, self.frontier.visited()) {
                self.frontier.push(&candidate);
            }
        }
    }

    /// Politeness pause between successful fetches
    async fn pause(&self) {
        let (min, max) = self.delay_range;
        if max <= 0.0 {
            return;
        }
        let seconds = {
            let mut rng = rand::rng();
            rng.random_range(min..=max)
        };
        tokio::time::sleep(Duration::from_secs_f64(seconds)).await;
    }
}

/// Crawls a site starting from `seed` with the default fetcher stack
///
/// Builds the HTTP client, fetches the site's robots policy when the
/// configuration asks for it, and runs the crawl to completion.
pub async fn crawl(seed: &str, config: &Config) -> Result<Vec<PageRecord>> {
    let client = build_http_client(&config.fetch)?;

    let robots = if config.crawler.respect_robots {
        let parsed = Url::parse(seed).map_err(|e| CrawlError::InvalidSeed {
            url: seed.to_string(),
            reason: e.to_string(),
        })?;
        robots_policy_for(&client, &parsed).await
    } else {
        RobotsPolicy::allow_all()
    };

    let fetcher = WebFetcher::new(client, &config.fetch);
    let coordinator = Coordinator::new(seed, config, fetcher, robots)?;

    Ok(coordinator.run().await)
}
