//! URL utilities for link absolutization and next-page validation.

use url::Url;

/// Schemes and prefixes the cleaner leaves untouched when absolutizing.
const PASSTHROUGH_PREFIXES: &[&str] = &["data:", "javascript:", "mailto:", "tel:", "#"];

/// Check if a string is a valid absolute http(s) URL.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }
    matches!(Url::parse(s), Ok(url) if url.host().is_some())
}

/// Resolve a possibly-relative URL against a base.
///
/// Already-absolute URLs, protocol-relative URLs, and the passthrough
/// schemes (`data:`, `javascript:`, `mailto:`, `tel:`, fragments) are
/// returned unchanged. Resolution failure returns the input unchanged.
#[must_use]
pub fn absolutize(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty()
        || url_str.starts_with("//")
        || PASSTHROUGH_PREFIXES.iter().any(|p| url_str.starts_with(p))
        || is_absolute_url(url_str)
    {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Validate a candidate next-page URL against the current page.
///
/// A candidate is acceptable only when it shares the current page's host,
/// differs from the current URL as a string, and differs in path or query
/// rather than only in fragment.
#[must_use]
pub fn is_valid_next_page(candidate: &Url, current: &Url) -> bool {
    if candidate.host_str().is_none() || candidate.host_str() != current.host_str() {
        return false;
    }
    if candidate.as_str() == current.as_str() {
        return false;
    }
    candidate.path() != current.path() || candidate.query() != current.query()
}

/// Parse a URL string into a `Url`, requiring it to be absolute.
#[must_use]
pub fn parse_absolute(url_str: &str) -> Option<Url> {
    if is_absolute_url(url_str) {
        Url::parse(url_str.trim()).ok()
    } else {
        None
    }
}
