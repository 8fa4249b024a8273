use crate::UrlError;
use url::Url;

/// Canonicalizes a link discovered on a page
///
/// # Normalization Steps
///
/// 1. If the link does not start with `http://` or `https://`, resolve it
///    against `source` (standard relative resolution: scheme and host are
///    inherited, `.` and `..` path segments are merged, the query survives).
///    Absolute `http(s)` links pass through byte-for-byte.
/// 2. Strip any fragment (`#...`) unconditionally; fragments never
///    distinguish crawl targets.
/// 3. Strip exactly one trailing `/`, so `/a/` and `/a` collapse to the same
///    canonical form.
///
/// Nothing else is touched: no case folding, no query-parameter sorting, no
/// default-port stripping.
///
/// # Known limitation
///
/// The trailing-slash collapse treats two URLs that may serve different
/// content as one identity, which can dedupe a page away falsely. The
/// behavior is intentional and load-bearing for the visited set; do not "fix"
/// it without migrating every consumer of the canonical form.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use siteharvest::normalize_link;
///
/// let source = Url::parse("http://x.com/a").unwrap();
/// assert_eq!(normalize_link("/b", &source).unwrap(), "http://x.com/b");
/// assert_eq!(
///     normalize_link("http://x.com/a/", &source).unwrap(),
///     "http://x.com/a"
/// );
/// ```
pub fn normalize_link(raw: &str, source: &Url) -> Result<String, UrlError> {
    let absolute = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        source
            .join(raw)
            .map_err(|e| UrlError::Parse(format!("cannot resolve '{}': {}", raw, e)))?
            .to_string()
    };

    let without_fragment = match absolute.split_once('#') {
        Some((head, _)) => head,
        None => absolute.as_str(),
    };

    let canonical = without_fragment
        .strip_suffix('/')
        .unwrap_or(without_fragment);

    Ok(canonical.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> Url {
        Url::parse("http://x.com/a").unwrap()
    }

    #[test]
    fn test_relative_link_resolves_against_source() {
        assert_eq!(normalize_link("/b", &source()).unwrap(), "http://x.com/b");
    }

    #[test]
    fn test_relative_path_link() {
        let source = Url::parse("http://x.com/dir/page").unwrap();
        assert_eq!(
            normalize_link("other", &source).unwrap(),
            "http://x.com/dir/other"
        );
    }

    #[test]
    fn test_dot_segments_merged() {
        let source = Url::parse("http://x.com/a/b/c").unwrap();
        assert_eq!(
            normalize_link("../d", &source).unwrap(),
            "http://x.com/a/d"
        );
    }

    #[test]
    fn test_absolute_link_passes_through() {
        assert_eq!(
            normalize_link("http://x.com/page", &source()).unwrap(),
            "http://x.com/page"
        );
    }

    #[test]
    fn test_trailing_slash_stripped() {
        assert_eq!(
            normalize_link("http://x.com/a/", &source()).unwrap(),
            "http://x.com/a"
        );
    }

    #[test]
    fn test_slash_and_bare_forms_collapse() {
        let with = normalize_link("http://x.com/a/", &source()).unwrap();
        let without = normalize_link("http://x.com/a", &source()).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_only_one_trailing_slash_stripped() {
        assert_eq!(
            normalize_link("http://x.com/a//", &source()).unwrap(),
            "http://x.com/a/"
        );
    }

    #[test]
    fn test_fragment_stripped() {
        assert_eq!(
            normalize_link("http://x.com/a#section", &source()).unwrap(),
            "http://x.com/a"
        );
    }

    #[test]
    fn test_fragment_only_link_resolves_to_source() {
        assert_eq!(
            normalize_link("#top", &source()).unwrap(),
            "http://x.com/a"
        );
    }

    #[test]
    fn test_query_preserved_unsorted() {
        assert_eq!(
            normalize_link("http://x.com/a?b=2&a=1", &source()).unwrap(),
            "http://x.com/a?b=2&a=1"
        );
    }

    #[test]
    fn test_no_case_folding_of_path() {
        assert_eq!(
            normalize_link("http://x.com/Page", &source()).unwrap(),
            "http://x.com/Page"
        );
    }

    #[test]
    fn test_port_preserved() {
        assert_eq!(
            normalize_link("http://x.com:8080/a", &source()).unwrap(),
            "http://x.com:8080/a"
        );
    }

    #[test]
    fn test_non_http_scheme_passes_through_resolution() {
        // Scheme filtering is the scope filter's job, not the normalizer's.
        assert_eq!(
            normalize_link("mailto:me@x.com", &source()).unwrap(),
            "mailto:me@x.com"
        );
    }

    #[test]
    fn test_root_relative_on_host_without_path() {
        let source = Url::parse("http://x.com").unwrap();
        assert_eq!(normalize_link("/b", &source).unwrap(), "http://x.com/b");
    }
}
