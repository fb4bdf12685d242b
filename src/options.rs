//! Configuration options for scanning and history retention.

/// Default number of scans kept in history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Default age, in days, after which history entries are pruned.
pub const DEFAULT_RETENTION_DAYS: i64 = 30;

/// Configuration options for scanning and history handling.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use legal_docs_scanner::Options;
///
/// let options = Options {
///     scan_headings: false,
///     ..Options::default()
/// };
/// assert_eq!(options.history_capacity, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Also report `h1`-`h3` headings that name a legal document.
    ///
    /// Catches documents that are a section of the current page rather than
    /// a link, e.g. a "Privacy Policy" heading.
    ///
    /// Default: `true`
    pub scan_headings: bool,

    /// Maximum number of scans kept in history; the oldest are dropped.
    ///
    /// Default: `50`
    pub history_capacity: usize,

    /// Entries older than this many days are removed when pruning.
    ///
    /// Default: `30`
    pub retention_days: i64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            scan_headings: true,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }
}

impl Options {
    /// Retention window as a duration.
    #[must_use]
    pub fn retention(&self) -> chrono::Duration {
        chrono::Duration::days(self.retention_days)
    }
}
