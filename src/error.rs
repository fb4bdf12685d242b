//! Error types for legal-docs-scanner.
//!
//! Classification and URL normalization never fail; errors only come from
//! DOM access, persistence and user-supplied configuration.

/// Error type for scanning and history operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A single DOM element could not be read. The scanner skips it.
    #[error("Element access failed: {0}")]
    Element(String),

    /// A keyword table is unusable (missing category, no phrases, ...).
    #[error("Invalid taxonomy: {0}")]
    InvalidTaxonomy(String),

    /// Reading or writing the history store failed.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// History or taxonomy JSON could not be encoded or decoded.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for scanner operations.
pub type Result<T> = std::result::Result<T, Error>;
