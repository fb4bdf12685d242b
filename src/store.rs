//! Persistence of scan history.
//!
//! The merge itself is pure ([`ScanHistory::merge_bounded`]); a store only
//! loads and saves whole histories under a key. Callers that record scans
//! from several tabs must serialize [`record_scan`] calls per key, otherwise
//! concurrent read-merge-write cycles lose updates.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::history::{HistoryEntry, ScanHistory};

/// Key under which the scan history is stored by default.
pub const HISTORY_KEY: &str = "scan_history";

/// Key-value storage for histories.
pub trait HistoryStore {
    /// Load the history stored under `key`, `None` if nothing was stored yet.
    fn get(&self, key: &str) -> Result<Option<ScanHistory>>;

    /// Replace the history stored under `key`.
    fn set(&mut self, key: &str, history: &ScanHistory) -> Result<()>;
}

/// Load, merge `entry`, save. Returns the saved history.
pub fn record_scan<S: HistoryStore + ?Sized>(
    store: &mut S,
    key: &str,
    entry: HistoryEntry,
    capacity: usize,
) -> Result<ScanHistory> {
    let stored = store
        .get(key)
        .inspect_err(|e| warn!(key, error = %e, "failed to load history"))?;
    let history = stored.unwrap_or_default().merge_bounded(entry, capacity);
    store
        .set(key, &history)
        .inspect_err(|e| warn!(key, error = %e, "failed to save history"))?;
    Ok(history)
}

/// In-process store, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    histories: HashMap<String, ScanHistory>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<ScanHistory>> {
        Ok(self.histories.get(key).cloned())
    }

    fn set(&mut self, key: &str, history: &ScanHistory) -> Result<()> {
        self.histories.insert(key.to_string(), history.clone());
        Ok(())
    }
}

/// One pretty-printed JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid store key {key:?}"),
            )
            .into());
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl HistoryStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<ScanHistory>> {
        let path = self.path_for(key)?;
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn set(&mut self, key: &str, history: &ScanHistory) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Write then rename so readers never see a half-written file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(history)?)?;
        fs::rename(&tmp, &path)?;

        debug!(path = %path.display(), entries = history.len(), "history saved");
        Ok(())
    }
}
