//! Incremental field scanner.
//!
//! # Invariants
//! - Each read appends exactly one unit (line or record) to the buffer.
//! - After each read, every unresolved key is searched in the buffer, then
//!   the buffer is cut back to its window.
//! - No read happens once every key is resolved.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::buffer::ScanBuffer;
use crate::error::{ExtractError, Result};
use crate::options::ExtractOptions;
use crate::pattern::FieldPattern;

/// Requested key to extracted value, `None` when the key was never found.
pub type FieldMap = BTreeMap<String, Option<String>>;

/// Outcome of one extraction call.
#[derive(Debug)]
pub struct ScanReport {
    pub fields: FieldMap,
    /// Lines or records read before the scan ended.
    pub units_read: usize,
    /// The scan ended because every key was resolved, not at end of input.
    pub stopped_early: bool,
    /// Read failure that ended the scan, if any.
    pub read_error: Option<std::io::Error>,
}

impl ScanReport {
    /// Extracted value for `key`, if it was requested and found.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|value| value.as_deref())
    }

    /// Check if every requested key was resolved.
    pub fn is_complete(&self) -> bool {
        self.fields.values().all(Option::is_some)
    }

    /// Requested keys that were not found.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key.as_str())
    }
}

/// Extract `keys` from the file at `path`.
///
/// # Errors
///
/// Returns [`ExtractError::Open`] if the file cannot be opened, and
/// [`ExtractError::EmptyKey`] or [`ExtractError::InvalidOptions`] for bad
/// arguments. Failures while reading are reported in the [`ScanReport`].
pub fn extract_fields<P, S>(path: P, keys: &[S], options: &ExtractOptions) -> Result<ScanReport>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let scanner = Scanner::new(keys, options)?;

    let file = File::open(path).map_err(|source| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), keys = keys.len(), "Scanning file");

    Ok(scanner.run(BufReader::new(file)))
}

/// Extract `keys` from any buffered reader.
///
/// Reading stops as soon as every key is resolved, so the reader is left
/// positioned just after the last unit consumed.
pub fn extract_from_reader<R, S>(reader: R, keys: &[S], options: &ExtractOptions) -> Result<ScanReport>
where
    R: BufRead,
    S: AsRef<str>,
{
    Ok(Scanner::new(keys, options)?.run(reader))
}

struct Scanner {
    pending: Vec<(String, FieldPattern)>,
    fields: FieldMap,
    buffer: ScanBuffer,
    terminator: u8,
}

impl Scanner {
    fn new<S: AsRef<str>>(keys: &[S], options: &ExtractOptions) -> Result<Self> {
        options.validate()?;

        let mut pending = Vec::with_capacity(keys.len());
        let mut fields = FieldMap::new();
        for key in keys {
            let key = key.as_ref();
            if key.is_empty() {
                return Err(ExtractError::EmptyKey);
            }
            if fields.insert(key.to_string(), None).is_none() {
                pending.push((key.to_string(), FieldPattern::new(key, &options.marker)?));
            }
        }

        Ok(Self {
            pending,
            fields,
            buffer: ScanBuffer::new(options.window),
            terminator: options.mode.terminator(),
        })
    }

    fn run<R: BufRead>(mut self, mut reader: R) -> ScanReport {
        let mut unit = Vec::new();
        let mut units_read = 0;
        let mut read_error = None;
        let mut stopped_early = false;

        loop {
            if self.pending.is_empty() {
                stopped_early = true;
                break;
            }

            unit.clear();
            match reader.read_until(self.terminator, &mut unit) {
                Ok(0) => break,
                Ok(_) => units_read += 1,
                Err(err) => {
                    warn!(error = %err, units_read, "Read failed, returning partial result");
                    read_error = Some(err);
                    break;
                }
            }

            self.buffer.push_bytes(&unit);
            self.resolve();
            if self.buffer.truncate_front() {
                debug!(units_read, "Scan buffer truncated to window");
            }
        }

        debug!(
            units_read,
            unresolved = self.pending.len(),
            stopped_early,
            "Scan finished"
        );

        ScanReport {
            fields: self.fields,
            units_read,
            stopped_early,
            read_error,
        }
    }

    // The buffer is left intact after a match so other pending keys can still
    // resolve from text already read.
    fn resolve(&mut self) {
        let Self {
            pending,
            fields,
            buffer,
            ..
        } = self;
        let text = buffer.as_str();

        pending.retain(|(key, pattern)| match pattern.find_value(text) {
            Some(value) => {
                debug!(key = key.as_str(), value = value.as_str(), "Resolved field");
                fields.insert(key.clone(), Some(value));
                false
            }
            None => true,
        });
    }
}
