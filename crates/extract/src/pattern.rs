//! Per-key field patterns.
//!
//! A field is `KEY`, whitespace, the literal marker, then the shortest span
//! up to a newline followed by an upper-case ASCII letter (the start of the
//! next record). The value is the last whitespace-delimited token of that
//! span.

use regex::Regex;

use crate::error::Result;

/// Compiled matcher for one key.
#[derive(Debug)]
pub(crate) struct FieldPattern {
    regex: Regex,
}

impl FieldPattern {
    pub(crate) fn new(key: &str, marker: &str) -> Result<Self> {
        let pattern = format!(
            r"(?s){}\s+{}(.*?)\n[A-Z]",
            regex::escape(key),
            regex::escape(marker)
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// First value found in `text`.
    ///
    /// A span with no token is skipped and the search moves on to the next
    /// occurrence.
    pub(crate) fn find_value(&self, text: &str) -> Option<String> {
        self.regex.captures_iter(text).find_map(|caps| {
            caps.get(1)
                .and_then(|span| span.as_str().split_whitespace().next_back())
                .map(str::to_owned)
        })
    }
}
