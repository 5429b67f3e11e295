//! Loader tests. Anything touching the process environment holds
//! [`env_lock`] and runs `#[serial]`.

use std::sync::Mutex;


/// Every `NEXUS_*` variable, unset, for tests that need a clean slate.
pub const CLEAN_ENV: [(&str, Option<&str>); 6] = [
    ("NEXUS_BASE_URL", None),
    ("NEXUS_USERNAME", None),
    ("NEXUS_PASSWORD", None),
    ("NEXUS_TIMEOUT", None),
    ("NEXUS_SKIP_VERIFY", None),
    ("NEXUS_MAX_PAGES", None),
];

pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
