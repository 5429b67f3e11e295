//! Shared test utilities for repotools integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - No `NEXUS_*` variable leaks in from the host environment.

use assert_cmd::Command;

/// Returns a hermetic `repotools` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Connection env vars are cleared to ensure no leakage from the host.
pub fn repotools_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("repotools");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("NEXUS_BASE_URL")
        .env_remove("NEXUS_USERNAME")
        .env_remove("NEXUS_PASSWORD")
        .env_remove("NEXUS_TIMEOUT")
        .env_remove("NEXUS_SKIP_VERIFY")
        .env_remove("NEXUS_MAX_PAGES")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `repotools` command pointed at `base_url`.
#[allow(dead_code)]
pub fn repotools_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = repotools_cmd();
    cmd.env("NEXUS_BASE_URL", base_url);
    cmd
}
