//! Page scanner.
//!
//! One synchronous pass over a [`PageSource`]:
//!
//! 1. Anchors, in document order. Each href is normalized against the page
//!    URL; self-links, fragment-only links and links without visible text
//!    are ignored. Every remaining URL is evaluated once: the first anchor
//!    pointing at it decides whether it is a legal document.
//! 2. Headings `h1`-`h3`, text only. A legal heading is reported with the
//!    page's own URL unless a match with the same visible text already
//!    exists.
//!
//! The set of evaluated URLs is shared by both phases, so no two matches in
//! a result share a URL.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::classifier::Classifier;
use crate::options::Options;
use crate::result::{LegalDocumentMatch, ScanResult};
use crate::source::{Anchor, Heading, PageSource};
use crate::taxonomy::Taxonomy;
use crate::url_utils::{is_fragment_only, normalize};
use crate::zone::{zone_for, Zone};

/// Scans pages for legal document references.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'t> {
    classifier: Classifier<'t>,
    scan_headings: bool,
}

impl Default for Scanner<'static> {
    fn default() -> Self {
        Self::new(Taxonomy::builtin(), &Options::default())
    }
}

/// Per-scan accumulator.
struct ScanState {
    page_url: String,
    seen: HashSet<String>,
    documents: Vec<LegalDocumentMatch>,
}

impl ScanState {
    /// Record `url` as evaluated. Returns `false` if it already was.
    fn mark_seen(&mut self, url: &str) -> bool {
        self.seen.insert(url.to_string())
    }

    fn has_text(&self, text: &str) -> bool {
        self.documents.iter().any(|d| d.text == text)
    }
}

impl<'t> Scanner<'t> {
    /// Scanner over `taxonomy`, configured by `options`.
    #[must_use]
    pub fn new(taxonomy: &'t Taxonomy, options: &Options) -> Self {
        Self {
            classifier: Classifier::new(taxonomy),
            scan_headings: options.scan_headings,
        }
    }

    /// The classifier links and headings are run through.
    #[must_use]
    pub fn classifier(&self) -> &Classifier<'t> {
        &self.classifier
    }

    /// Scan a page, stamping the result with the current time.
    #[must_use]
    pub fn scan<S: PageSource + ?Sized>(&self, source: &S) -> ScanResult {
        self.scan_at(source, Utc::now())
    }

    /// Scan a page, stamping the result with `scanned_at`.
    #[must_use]
    pub fn scan_at<S: PageSource + ?Sized>(
        &self,
        source: &S,
        scanned_at: DateTime<Utc>,
    ) -> ScanResult {
        let base = source.page_url();
        let mut state = ScanState {
            page_url: normalize(base, base),
            seen: HashSet::new(),
            documents: Vec::new(),
        };

        for anchor in source.anchors() {
            match anchor {
                Ok(anchor) => self.visit_anchor(&mut state, base, &anchor),
                Err(e) => warn!(page = %state.page_url, error = %e, "skipping unreadable anchor"),
            }
        }

        if self.scan_headings {
            for heading in source.headings() {
                match heading {
                    Ok(heading) => self.visit_heading(&mut state, &heading),
                    Err(e) => {
                        warn!(page = %state.page_url, error = %e, "skipping unreadable heading");
                    }
                }
            }
        }

        debug!(
            page = %state.page_url,
            documents = state.documents.len(),
            evaluated_urls = state.seen.len(),
            "scan complete"
        );

        ScanResult {
            page_url: state.page_url,
            page_title: source.title().to_string(),
            scanned_at,
            documents: state.documents,
        }
    }

    fn visit_anchor(&self, state: &mut ScanState, base: &str, anchor: &Anchor) {
        let url = normalize(&anchor.href, base);
        let text = anchor.text.trim();

        if url.is_empty() || url == state.page_url || is_fragment_only(&url) || text.is_empty() {
            debug!(href = %anchor.href, "ignoring anchor");
            return;
        }

        if !state.mark_seen(&url) {
            return;
        }

        if let Some(category) = self.classifier.classify(text, &url) {
            state.documents.push(LegalDocumentMatch {
                category,
                url,
                text: text.to_string(),
                found_in: zone_for(&anchor.chain),
            });
        }
    }

    fn visit_heading(&self, state: &mut ScanState, heading: &Heading) {
        let text = heading.text.trim();
        let Some(category) = self.classifier.classify_text(text) else {
            return;
        };

        if state.has_text(text) {
            debug!(text, "heading duplicates an existing match");
            return;
        }

        let url = state.page_url.clone();
        if !state.mark_seen(&url) {
            debug!(text, "page URL already reported; dropping heading match");
            return;
        }

        state.documents.push(LegalDocumentMatch {
            category,
            url,
            text: text.to_string(),
            found_in: Zone::Header,
        });
    }
}

/// Scan a page with the built-in taxonomy and default options.
#[must_use]
pub fn scan<S: PageSource + ?Sized>(source: &S) -> ScanResult {
    Scanner::default().scan(source)
}
