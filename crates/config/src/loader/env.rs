//! `NEXUS_*` environment variables.
//!
//! Blank values count as unset; everything else is trimmed before parsing.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_BASE_URL, ENV_MAX_PAGES, ENV_PASSWORD, ENV_SKIP_VERIFY, ENV_TIMEOUT, ENV_USERNAME,
};

/// Trimmed value of `key`, or `None` when it is unset or blank.
pub fn env_var_or_none(key: &str) -> Option<String> {
    let value = std::env::var(key).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn parse_env<T: FromStr>(key: &str, expected: &str) -> Result<Option<T>, ConfigError> {
    let Some(raw) = env_var_or_none(key) else {
        return Ok(None);
    };
    raw.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
        var: key.to_owned(),
        message: format!("{expected}, got {raw:?}"),
    })
}

/// Snapshot of the environment as a loader holding only what was set.
pub(super) fn read_env() -> Result<ConfigLoader, ConfigError> {
    Ok(ConfigLoader {
        base_url: env_var_or_none(ENV_BASE_URL),
        username: env_var_or_none(ENV_USERNAME),
        password: env_var_or_none(ENV_PASSWORD).map(|p| SecretString::new(p.into())),
        skip_verify: parse_env(ENV_SKIP_VERIFY, "expected true or false")?,
        timeout: parse_env(ENV_TIMEOUT, "expected whole seconds")?.map(Duration::from_secs),
        max_pages: parse_env(ENV_MAX_PAGES, "expected a page count")?,
    })
}
