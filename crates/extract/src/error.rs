//! Error types for field extraction.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that abort an extraction before any scanning happens.
///
/// Read failures after the scan has started are not errors; they end the
/// scan and are reported in [`crate::ScanReport::read_error`].
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The input file could not be opened.
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Options out of range (zero window, empty marker).
    #[error("Invalid extraction options: {0}")]
    InvalidOptions(String),

    /// A requested key was the empty string.
    #[error("Extraction keys must not be empty")]
    EmptyKey,

    /// A field pattern failed to compile.
    #[error("Invalid field pattern: {0}")]
    Pattern(#[from] regex::Error),
}
