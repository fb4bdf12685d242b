//! Bounded scan history.
//!
//! History is ordered most-recent-first and holds at most one entry per page
//! identity (tab + URL). Re-scanning a page that is already in history
//! replaces its entry where it stands instead of pushing a new one, so
//! repeated scans of one tab on every page load do not crowd out the rest.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::options::DEFAULT_HISTORY_CAPACITY;
use crate::result::ScanResult;
use crate::taxonomy::Category;
use crate::url_utils::normalize;

/// The page a scan belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageIdentity {
    /// Browser tab the page was open in, when known.
    pub tab_id: Option<i64>,
    pub page_url: String,
}

impl PageIdentity {
    /// Whether two identities denote the same logical page.
    ///
    /// Requires both tab ids to be known; without a tab id, a scan can't be
    /// tied to an earlier one and is treated as new.
    #[must_use]
    pub fn same_page(&self, other: &PageIdentity) -> bool {
        matches!((self.tab_id, other.tab_id), (Some(a), Some(b)) if a == b)
            && self.page_url == other.page_url
    }
}

/// One recorded scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub page_identity: PageIdentity,
    pub scan_result: ScanResult,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Entry for `scan_result`, keyed on its normalized page URL and `tab_id`.
    #[must_use]
    pub fn new(tab_id: Option<i64>, scan_result: ScanResult, recorded_at: DateTime<Utc>) -> Self {
        let page_url = normalize(&scan_result.page_url, &scan_result.page_url);
        Self {
            page_identity: PageIdentity { tab_id, page_url },
            scan_result,
            recorded_at,
        }
    }
}

/// Most-recent-first list of scans.
///
/// Serialized as a bare JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanHistory {
    entries: Vec<HistoryEntry>,
}

/// Aggregate figures over a history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub total_scans: usize,
    pub total_documents: usize,
    /// Recording time of the newest entry.
    pub last_scan_date: Option<DateTime<Utc>>,
    /// Category with the most matches; ties go to the one seen first.
    pub most_common_type: Option<Category>,
}

impl ScanHistory {
    /// Empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries already ordered most-recent-first, keeping at most
    /// `capacity` of them.
    #[must_use]
    pub fn from_entries(mut entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        entries.truncate(capacity);
        Self { entries }
    }

    /// Entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest entry recorded for `identity`.
    #[must_use]
    pub fn find(&self, identity: &PageIdentity) -> Option<&HistoryEntry> {
        self.entries
            .iter()
            .find(|e| e.page_identity.same_page(identity))
    }

    /// Fold `entry` into the history with the default capacity of 50.
    #[must_use]
    pub fn merge(self, entry: HistoryEntry) -> Self {
        self.merge_bounded(entry, DEFAULT_HISTORY_CAPACITY)
    }

    /// Fold `entry` into the history.
    ///
    /// An entry for the same page replaces the existing one in place.
    /// Otherwise the entry goes to the front. The oldest entries are then
    /// dropped until at most `capacity` remain.
    #[must_use]
    pub fn merge_bounded(mut self, entry: HistoryEntry, capacity: usize) -> Self {
        let existing = self
            .entries
            .iter()
            .position(|e| e.page_identity.same_page(&entry.page_identity));

        match existing {
            Some(i) => self.entries[i] = entry,
            None => self.entries.insert(0, entry),
        }

        if self.entries.len() > capacity {
            debug!(
                dropped = self.entries.len() - capacity,
                capacity, "history full; dropping oldest entries"
            );
            self.entries.truncate(capacity);
        }

        self
    }

    /// Drop entries recorded more than `max_age` before `now`.
    ///
    /// # Returns
    /// * The number of entries removed
    pub fn prune_older_than(&mut self, now: DateTime<Utc>, max_age: Duration) -> usize {
        let cutoff = now - max_age;
        let before = self.entries.len();
        self.entries.retain(|e| e.recorded_at > cutoff);
        before - self.entries.len()
    }

    /// Totals, newest recording time and most common category.
    #[must_use]
    pub fn stats(&self) -> HistoryStats {
        let mut counts: Vec<(Category, usize)> = Vec::new();
        for doc in self.entries.iter().flat_map(|e| &e.scan_result.documents) {
            match counts.iter_mut().find(|(c, _)| *c == doc.category) {
                Some((_, n)) => *n += 1,
                None => counts.push((doc.category, 1)),
            }
        }

        let mut most_common: Option<(Category, usize)> = None;
        for (category, n) in counts {
            if most_common.is_none_or(|(_, best)| n > best) {
                most_common = Some((category, n));
            }
        }

        HistoryStats {
            total_scans: self.entries.len(),
            total_documents: self
                .entries
                .iter()
                .map(|e| e.scan_result.documents.len())
                .sum(),
            last_scan_date: self.entries.first().map(|e| e.recorded_at),
            most_common_type: most_common.map(|(c, _)| c),
        }
    }
}

/// Fold `entry` into `history` (capacity 50).
#[must_use]
pub fn merge(history: ScanHistory, entry: HistoryEntry) -> ScanHistory {
    history.merge(entry)
}
