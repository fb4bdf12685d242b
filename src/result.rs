//! Result types for scan output.
//!
//! Field names follow the JSON schema consumed by the badge, listing and
//! export: `type`, `url`, `text`, `foundIn` for matches, camelCase for the
//! scan envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::taxonomy::Category;
use crate::zone::Zone;

/// A reference to a legal document found on a page.
///
/// Identity for deduplication is `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDocumentMatch {
    /// Document category, serialized as its canonical label.
    #[serde(rename = "type")]
    pub category: Category,

    /// Normalized absolute URL of the document.
    pub url: String,

    /// Visible text of the link or heading, trimmed, original case.
    pub text: String,

    /// Structural zone the reference was found in.
    #[serde(rename = "foundIn")]
    pub found_in: Zone,
}

/// Outcome of one scan of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// URL of the scanned page, normalized against itself.
    pub page_url: String,

    /// Page title, empty when the page has none.
    pub page_title: String,

    /// When the scan ran.
    pub scanned_at: DateTime<Utc>,

    /// Matches in discovery order: links first, then headings.
    pub documents: Vec<LegalDocumentMatch>,
}

impl ScanResult {
    /// Number of documents found, as shown on the badge.
    #[must_use]
    pub fn count(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
