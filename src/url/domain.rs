use url::Url;

/// Extracts the host component of a URL
///
/// The host fixes a crawl's domain scope: the seed's host is captured once and
/// every candidate URL is compared against it by exact string match (no
/// subdomain folding).
///
/// # Examples
///
/// ```
/// use url::Url;
/// use siteharvest::extract_domain;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_string())
}
