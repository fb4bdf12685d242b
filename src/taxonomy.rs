//! Keyword taxonomy for legal document categories.
//!
//! The taxonomy is an ordered table: categories are tried in declaration
//! order and, within a category, phrases are tried in declaration order.
//! That order decides which category wins when a link matches several.

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::patterns::WHITESPACE_RUN;

/// Category of legal document.
///
/// Serialized as its canonical display label, which is also the `type`
/// field of exported matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Terms of use / terms of sale.
    #[serde(rename = "CGU")]
    Cgu,
    /// Legal notice / imprint.
    #[serde(rename = "Mentions légales")]
    Mentions,
    /// Privacy policy.
    #[serde(rename = "Politique de confidentialité")]
    Privacy,
    /// Cookie policy.
    #[serde(rename = "Politique de cookies")]
    Cookies,
}

impl Category {
    /// All categories, in built-in taxonomy order.
    pub const ALL: [Category; 4] = [
        Category::Cgu,
        Category::Mentions,
        Category::Privacy,
        Category::Cookies,
    ];

    /// Canonical display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cgu => "CGU",
            Self::Mentions => "Mentions légales",
            Self::Privacy => "Politique de confidentialité",
            Self::Cookies => "Politique de cookies",
        }
    }

    /// Look up a category by its canonical label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Icon shown next to the label in listings.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Cgu => "📋",
            Self::Mentions => "⚖️",
            Self::Privacy => "🔒",
            Self::Cookies => "🍪",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A keyword phrase with its precomputed URL spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    phrase: String,
    hyphenated: String,
    underscored: String,
}

impl Keyword {
    fn new(phrase: &str) -> Self {
        let phrase = phrase.trim().to_lowercase();
        let hyphenated = WHITESPACE_RUN.replace_all(&phrase, "-").into_owned();
        let underscored = WHITESPACE_RUN.replace_all(&phrase, "_").into_owned();
        Self {
            phrase,
            hyphenated,
            underscored,
        }
    }

    /// The lowercase phrase as matched against visible text.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Whether lowercased `text` contains the phrase.
    #[inline]
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        text.contains(&self.phrase)
    }

    /// Whether lowercased `url` contains the phrase spelled with `-` or `_`.
    #[inline]
    #[must_use]
    pub fn matches_url(&self, url: &str) -> bool {
        !url.is_empty() && (url.contains(&self.hyphenated) || url.contains(&self.underscored))
    }
}

/// One category and its ordered phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    category: Category,
    keywords: Vec<Keyword>,
}

impl KeywordEntry {
    /// Build an entry. Phrases are lowercased; blank phrases are dropped.
    #[must_use]
    pub fn new<S: AsRef<str>>(category: Category, phrases: &[S]) -> Self {
        let keywords = phrases
            .iter()
            .filter(|p| !p.as_ref().trim().is_empty())
            .map(|p| Keyword::new(p.as_ref()))
            .collect();
        Self { category, keywords }
    }

    /// Category this entry classifies into.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Phrases in declaration order.
    #[must_use]
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }
}

/// Serialized form of a taxonomy entry, as found in JSON keyword files.
#[derive(Debug, Deserialize)]
struct RawEntry {
    category: Category,
    keywords: Vec<String>,
}

/// Ordered, immutable category -> phrases table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    entries: Vec<KeywordEntry>,
}

static BUILTIN: LazyLock<Taxonomy> = LazyLock::new(|| Taxonomy {
    entries: vec![
        KeywordEntry::new(
            Category::Cgu,
            &[
                "cgu",
                "conditions générales d'utilisation",
                "conditions d'utilisation",
                "terms of service",
                "terms of use",
                "terms and conditions",
                "conditions générales",
                "cgv",
                "conditions générales de vente",
                "terms & conditions",
            ],
        ),
        KeywordEntry::new(
            Category::Mentions,
            &[
                "mentions légales",
                "legal notice",
                "mentions",
                "informations légales",
                "legal information",
                "imprint",
            ],
        ),
        KeywordEntry::new(
            Category::Privacy,
            &[
                "politique de confidentialité",
                "privacy policy",
                "confidentialité",
                "données personnelles",
                "protection des données",
                "privacy",
                "personal data",
                "data protection",
            ],
        ),
        KeywordEntry::new(
            Category::Cookies,
            &[
                "politique de cookies",
                "cookie policy",
                "cookies",
                "gestion des cookies",
                "cookie management",
                "cookie settings",
            ],
        ),
    ],
});

impl Taxonomy {
    /// The built-in French/English table, shared process-wide.
    #[must_use]
    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN
    }

    /// Build a custom taxonomy.
    ///
    /// Each category may appear at most once and must keep at least one
    /// phrase. Categories that are left out are simply never matched.
    pub fn new(entries: Vec<KeywordEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::InvalidTaxonomy("no categories".to_string()));
        }
        for (i, entry) in entries.iter().enumerate() {
            if entry.keywords.is_empty() {
                return Err(Error::InvalidTaxonomy(format!(
                    "category {} has no keywords",
                    entry.category
                )));
            }
            if entries[..i].iter().any(|e| e.category == entry.category) {
                return Err(Error::InvalidTaxonomy(format!(
                    "category {} declared twice",
                    entry.category
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a taxonomy from JSON.
    ///
    /// Expected shape: `[{"category": "CGU", "keywords": ["cgu", ...]}, ...]`,
    /// categories given by their canonical label.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(|r| KeywordEntry::new(r.category, r.keywords.as_slice()))
            .collect();
        Self::new(entries)
    }

    /// Entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    /// Phrases declared for `category`, or an empty slice.
    #[must_use]
    pub fn keywords(&self, category: Category) -> &[Keyword] {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map_or(&[], |e| e.keywords.as_slice())
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_is_cgu_mentions_privacy_cookies() {
        let order: Vec<Category> = Taxonomy::builtin()
            .entries()
            .iter()
            .map(KeywordEntry::category)
            .collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn builtin_phrases_are_lowercase() {
        for entry in Taxonomy::builtin().entries() {
            for kw in entry.keywords() {
                assert_eq!(kw.phrase(), kw.phrase().to_lowercase());
            }
        }
        assert!(Taxonomy::builtin()
            .keywords(Category::Cgu)
            .iter()
            .any(|k| k.phrase() == "terms & conditions"));
    }

    #[test]
    fn labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("Conditions générales"), None);
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&Category::Privacy).unwrap_or_default();
        assert_eq!(json, "\"Politique de confidentialité\"");
    }

    #[test]
    fn keyword_url_spellings() {
        let kw = Keyword::new("Cookie  Policy");
        assert_eq!(kw.phrase(), "cookie  policy");
        assert!(kw.matches_url("https://x.com/cookie-policy"));
        assert!(kw.matches_url("https://x.com/cookie_policy"));
        assert!(!kw.matches_url("https://x.com/cookie%20policy"));
        assert!(!kw.matches_url(""));
    }

    #[test]
    fn entry_drops_blank_phrases() {
        let entry = KeywordEntry::new(Category::Cookies, &["cookies", "  ", ""]);
        assert_eq!(entry.keywords().len(), 1);
    }

    #[test]
    fn new_rejects_duplicate_and_empty_categories() {
        let dup = Taxonomy::new(vec![
            KeywordEntry::new(Category::Cgu, &["cgu"]),
            KeywordEntry::new(Category::Cgu, &["cgv"]),
        ]);
        assert!(matches!(dup, Err(Error::InvalidTaxonomy(_))));

        let empty = Taxonomy::new(vec![KeywordEntry::new(Category::Privacy, &[" "])]);
        assert!(matches!(empty, Err(Error::InvalidTaxonomy(_))));

        assert!(matches!(Taxonomy::new(Vec::new()), Err(Error::InvalidTaxonomy(_))));
    }

    #[test]
    fn from_json_builds_custom_table() {
        let json = r#"[
            {"category": "Politique de cookies", "keywords": ["Cookie Banner"]},
            {"category": "CGU", "keywords": ["nutzungsbedingungen"]}
        ]"#;
        let taxonomy = Taxonomy::from_json(json).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(taxonomy.entries()[0].category(), Category::Cookies);
        assert_eq!(taxonomy.keywords(Category::Cookies)[0].phrase(), "cookie banner");
        assert!(taxonomy.keywords(Category::Privacy).is_empty());
    }

    #[test]
    fn from_json_rejects_unknown_label() {
        let json = r#"[{"category": "Impressum", "keywords": ["impressum"]}]"#;
        assert!(matches!(Taxonomy::from_json(json), Err(Error::Json(_))));
    }
}
