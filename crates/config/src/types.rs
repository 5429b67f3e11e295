//! Validated settings handed to the client.
//!
//! Passwords stay wrapped in [`SecretString`] so `Debug` output never shows
//! them.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::{DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS};

/// How requests identify themselves to the server.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// `Authorization: Basic` on every page request.
    Basic {
        username: String,
        password: SecretString,
    },
    Anonymous,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub strategy: AuthStrategy,
}

/// Where the server lives and how patient to be with it.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Absolute http(s) URL without a trailing slash.
    pub base_url: String,
    /// Accept invalid certificates on https URLs.
    pub skip_verify: bool,
    pub timeout: Duration,
    /// Page cap for one listing walk.
    pub max_pages: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Basic credentials with default connection settings.
    pub fn with_basic_auth(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::Basic { username, password },
            },
        }
    }

    pub fn anonymous(base_url: String) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::Anonymous,
            },
        }
    }
}

impl ConnectionConfig {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}
