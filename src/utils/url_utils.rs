//! URL helpers for scraped links.

use url::Url;

/// Check if a URL is an absolute http(s) URL
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Resolve an anchor `href` the way a browser's `a.href` property does
///
/// Relative references are joined onto `base`. Returns `None` for an empty
/// href or one that cannot be resolved. An unparsable base still lets an
/// already-absolute href through.
#[must_use]
pub fn resolve_href(base: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    match Url::parse(base) {
        Ok(base) => base.join(href).ok().map(String::from),
        Err(_) => Url::parse(href).ok().map(String::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_href_against_frame_url() {
        let resolved = resolve_href(
            "https://non-clinical-emory.icims.com/jobs/search?in_iframe=1",
            "/jobs/12345/analyst/job?in_iframe=1",
        );
        assert_eq!(
            resolved.as_deref(),
            Some("https://non-clinical-emory.icims.com/jobs/12345/analyst/job?in_iframe=1")
        );
    }

    #[test]
    fn keeps_absolute_href() {
        let resolved = resolve_href("not a url", "https://example.com/jobs/1");
        assert_eq!(resolved.as_deref(), Some("https://example.com/jobs/1"));
    }

    #[test]
    fn empty_href_is_absent() {
        assert_eq!(resolve_href("https://example.com/", "   "), None);
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(is_valid_url("https://example.com/jobs/1"));
        assert!(!is_valid_url("javascript:void(0)"));
        assert!(!is_valid_url(""));
    }
}
