//! Keyword classifier.
//!
//! A link is classified from two signals: its visible text and its URL.
//! Text is matched against phrases as written; the URL is matched against
//! the phrase with whitespace replaced by `-` or `_`, since URL paths spell
//! "cookie policy" as `cookie-policy` or `cookie_policy`.
//!
//! The first category (in taxonomy order) for which any phrase matches
//! either signal wins. Later categories are not evaluated.

use crate::taxonomy::{Category, Taxonomy};

/// Coarse substrings that mark a single link as worth a closer look.
///
/// Used for one-off link checks, where no visible text is available.
const LEGAL_URL_HINTS: &[&str] = &[
    "cgu",
    "conditions",
    "terms",
    "legal",
    "privacy",
    "confidentialite",
    "mentions",
    "cookies",
    "policy",
    "politique",
];

/// Classifies text/URL signals against a taxonomy.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'t> {
    taxonomy: &'t Taxonomy,
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new(Taxonomy::builtin())
    }
}

impl<'t> Classifier<'t> {
    /// Classifier over `taxonomy`.
    #[must_use]
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// The table categories are looked up in.
    #[must_use]
    pub fn taxonomy(&self) -> &'t Taxonomy {
        self.taxonomy
    }

    /// Classify a link from its visible text and URL.
    ///
    /// Pass an empty `url` when only text is available (headings).
    ///
    /// # Returns
    /// * The first matching category, or `None` when nothing matches
    #[must_use]
    pub fn classify(&self, text: &str, url: &str) -> Option<Category> {
        let text = text.to_lowercase();
        let url = url.to_lowercase();

        self.taxonomy
            .entries()
            .iter()
            .find(|entry| {
                entry
                    .keywords()
                    .iter()
                    .any(|kw| kw.matches_text(&text) || kw.matches_url(&url))
            })
            .map(crate::taxonomy::KeywordEntry::category)
    }

    /// Classify from visible text only.
    #[inline]
    #[must_use]
    pub fn classify_text(&self, text: &str) -> Option<Category> {
        self.classify(text, "")
    }
}

/// Classify with the built-in taxonomy.
///
/// # Example
///
/// ```rust
/// use legal_docs_scanner::{classify, Category};
///
/// assert_eq!(classify("Terms of Service", "https://x.com/tos"), Some(Category::Cgu));
/// assert_eq!(classify("", "https://x.com/cookie-policy"), Some(Category::Cookies));
/// assert_eq!(classify("random text", "https://x.com/about"), None);
/// ```
#[must_use]
pub fn classify(text: &str, url: &str) -> Option<Category> {
    Classifier::default().classify(text, url)
}

/// Quick check whether a bare URL looks like a legal document link.
///
/// Broader than [`classify`]: it accepts any URL containing a generic hint
/// such as `terms` or `policy`, and does not say which category it is.
#[must_use]
pub fn looks_like_legal_url(url: &str) -> bool {
    let url = url.to_lowercase();
    LEGAL_URL_HINTS.iter().any(|hint| url.contains(hint))
}
