//! Bounded-window text field extractor.
//!
//! Scans a text file one line (or one delimited record) at a time and pulls
//! out, for each requested key, the value that follows a fixed marker token
//! and precedes the next record.
//!
//! Responsibilities:
//! - Incremental reading with a bounded trailing buffer.
//! - Per-key matching with early stop once every key is resolved.
//! - Lenient decoding: invalid UTF-8 bytes are skipped.
//!
//! Does NOT handle:
//! - Printing or serializing results (the CLI does that).
//! - Parallel scans; each call owns its buffer and result.
//!
//! Invariants:
//! - The result map holds exactly the requested keys, fixed at call time.
//! - A resolved key is never searched for again.
//! - The buffer never holds more than `window` characters between reads.

mod buffer;
mod error;
mod options;
mod pattern;
mod scanner;

pub use error::{ExtractError, Result};
pub use options::{ExtractOptions, ScanMode};
pub use scanner::{FieldMap, ScanReport, extract_fields, extract_from_reader};
