//! Extraction options.

use repotools_config::constants::{DEFAULT_MARKER, DEFAULT_SCAN_WINDOW_CHARS};

use crate::error::{ExtractError, Result};

/// How the input is split into read units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// One `\n`-terminated line per read.
    #[default]
    Lines,
    /// One record per read, terminated by the given byte.
    Records(u8),
}

impl ScanMode {
    pub(crate) fn terminator(self) -> u8 {
        match self {
            Self::Lines => b'\n',
            Self::Records(delimiter) => delimiter,
        }
    }
}

/// Options for one extraction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Literal token that precedes the value region.
    pub marker: String,
    /// Maximum number of characters kept in the trailing buffer.
    pub window: usize,
    pub mode: ScanMode,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            window: DEFAULT_SCAN_WINDOW_CHARS,
            mode: ScanMode::Lines,
        }
    }
}

impl ExtractOptions {
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(ExtractError::InvalidOptions(
                "window must be at least 1 character".to_string(),
            ));
        }
        if self.marker.is_empty() {
            return Err(ExtractError::InvalidOptions(
                "marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
