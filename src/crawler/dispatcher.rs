//! Fetch dispatch: choosing between static and rendered fetching
//!
//! The choice is made from the URL alone, before any bytes are fetched. URLs
//! that look like single-page-application routes go to the rendering
//! browser; everything else takes the cheap static path.

use crate::config::ClassifierConfig;
use crate::extract::PageRecord;
use crate::fetch::PageFetcher;
use crate::FetchError;

/// Classifies URLs as script-heavy or plain documents
///
/// The heuristic is substring containment over the whole URL string. It is
/// deliberately coarse; misclassifying a static page as script-heavy only
/// costs a slower fetch, not a wrong result.
#[derive(Debug, Clone)]
pub struct UrlClassifier {
    markers: Vec<String>,
}

impl Default for UrlClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default().script_markers)
    }
}

impl UrlClassifier {
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }

    /// True if any marker substring appears anywhere in the URL
    pub fn is_script_heavy(&self, url: &str) -> bool {
        self.markers.iter().any(|marker| url.contains(marker.as_str()))
    }
}

/// Routes each URL to the fetch strategy its classification calls for
pub struct FetchDispatcher<F: PageFetcher> {
    fetcher: F,
    classifier: UrlClassifier,
}

impl<F: PageFetcher> FetchDispatcher<F> {
    pub fn new(fetcher: F, classifier: UrlClassifier) -> Self {
        Self {
            fetcher,
            classifier,
        }
    }

    /// Fetches one URL, rendered or static per its classification
    pub async fn fetch(&self, url: &str) -> Result<PageRecord, FetchError> {
        if self.classifier.is_script_heavy(url) {
            tracing::debug!("Using rendered fetch for {}", url);
            self.fetcher.fetch_rendered(url).await
        } else {
            tracing::debug!("Using static fetch for {}", url);
            self.fetcher.fetch_static(url).await
        }
    }
}
