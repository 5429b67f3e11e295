//! Defaults and environment variable names shared by the repotools crates.

// --- connection & timeout defaults ---

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Upper bound accepted for `NEXUS_TIMEOUT`, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// --- pagination defaults ---

/// Default upper bound on pages fetched by a single listing walk.
///
/// A server that keeps handing out continuation tokens is cut off here.
pub const DEFAULT_MAX_PAGES: usize = 1000;

// --- extraction defaults ---

/// Default marker token that precedes an extractable value.
pub const DEFAULT_MARKER: &str = "BIC11";

/// Default scan window, in characters.
pub const DEFAULT_SCAN_WINDOW_CHARS: usize = 10_000;

// --- environment variable names ---

pub const ENV_BASE_URL: &str = "NEXUS_BASE_URL";
pub const ENV_USERNAME: &str = "NEXUS_USERNAME";
pub const ENV_PASSWORD: &str = "NEXUS_PASSWORD";
pub const ENV_TIMEOUT: &str = "NEXUS_TIMEOUT";
pub const ENV_SKIP_VERIFY: &str = "NEXUS_SKIP_VERIFY";
pub const ENV_MAX_PAGES: &str = "NEXUS_MAX_PAGES";
