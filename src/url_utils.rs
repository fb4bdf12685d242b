//! URL Utility Functions
//!
//! Resolution of link targets against the page they were found on. The
//! normalized string is the identity of a legal document: two links point to
//! the same document iff their normalized forms are equal.

use url::Url;

/// Resolve `raw` against `base` into an absolute URL string.
///
/// Standard URL resolution rules apply (scheme, authority, path, query,
/// fragment). Nothing else is canonicalized: trailing slashes and fragments
/// are kept as-is.
///
/// # Returns
/// * The absolute URL, or `raw` unchanged when it cannot be resolved
///
/// # Examples
/// ```
/// use legal_docs_scanner::url_utils::normalize;
///
/// assert_eq!(
///     normalize("/privacy", "https://example.com/home"),
///     "https://example.com/privacy"
/// );
/// assert_eq!(normalize("http://[::1", "https://example.com/"), "http://[::1");
/// ```
#[must_use]
pub fn normalize(raw: &str, base: &str) -> String {
    let resolved = match Url::parse(base) {
        Ok(base_url) => base_url.join(raw),
        Err(_) => Url::parse(raw),
    };

    match resolved {
        Ok(url) => url.to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Check whether a link only targets a fragment of the current page.
#[inline]
#[must_use]
pub fn is_fragment_only(s: &str) -> bool {
    s.starts_with('#')
}

/// Parse an absolute http(s) URL with a host.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL, `None` otherwise
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    let s = url_str.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }

    Url::parse(s).ok().filter(|url| url.host().is_some())
}
