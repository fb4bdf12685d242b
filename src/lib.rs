//! # legal-docs-scanner
//!
//! Finds references to legal documents in a web page: terms of use, legal
//! notices, privacy policies and cookie policies, in French and English.
//!
//! Links are classified from their visible text and their URL against a
//! keyword taxonomy, deduplicated by normalized URL, and tagged with the
//! page zone they sit in (footer, navigation, header, page). Headings that
//! name a legal document are reported as well. Scan results can be folded
//! into a bounded per-page history.
//!
//! ## Quick Start
//!
//! ```rust
//! use legal_docs_scanner::{scan, Category, HtmlPage, Zone};
//!
//! let html = r#"<html><head><title>Shop</title></head><body>
//!   <main><a href="/blog">Blog</a></main>
//!   <footer><a href="/legal">Mentions légales</a></footer>
//! </body></html>"#;
//!
//! let page = HtmlPage::new(html, "https://shop.example/home");
//! let result = scan(&page);
//!
//! assert_eq!(result.count(), 1);
//! assert_eq!(result.documents[0].category, Category::Mentions);
//! assert_eq!(result.documents[0].url, "https://shop.example/legal");
//! assert_eq!(result.documents[0].found_in, Zone::Footer);
//! ```
//!
//! ## Recording history
//!
//! ```rust
//! use chrono::Utc;
//! use legal_docs_scanner::{scan, HistoryEntry, HtmlPage, ScanHistory};
//!
//! let page = HtmlPage::new(r#"<a href="/privacy">Privacy</a>"#, "https://a.example/");
//! let entry = HistoryEntry::new(Some(5), scan(&page), Utc::now());
//!
//! let history = ScanHistory::new().merge(entry.clone()).merge(entry);
//! assert_eq!(history.len(), 1);
//! ```

mod error;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection for HTML bytes.
pub mod encoding;

/// URL resolution against the page base.
pub mod url_utils;

/// Category -> keyword phrases table.
pub mod taxonomy;

/// Text/URL keyword classification.
pub mod classifier;

/// Structural zones (footer, navigation, header, page).
pub mod zone;

/// Document access boundary used by the scanner.
pub mod source;

/// HTML snapshot page source.
pub mod page;

/// Anchor and heading scanning.
pub mod scanner;

/// Bounded, deduplicated scan history.
pub mod history;

/// History persistence.
pub mod store;

/// Badge, JSON export and listing.
pub mod report;

// Public API - re-exports
pub use classifier::{classify, looks_like_legal_url, Classifier};
pub use error::{Error, Result};
pub use history::{merge, HistoryEntry, HistoryStats, PageIdentity, ScanHistory};
pub use options::{Options, DEFAULT_HISTORY_CAPACITY, DEFAULT_RETENTION_DAYS};
pub use page::HtmlPage;
pub use result::{LegalDocumentMatch, ScanResult};
pub use scanner::{scan, Scanner};
pub use source::{Anchor, Heading, PageSource};
pub use store::{record_scan, HistoryStore, JsonFileStore, MemoryStore, HISTORY_KEY};
pub use taxonomy::{Category, KeywordEntry, Taxonomy};
pub use url_utils::normalize;
pub use zone::{Landmark, Zone};
