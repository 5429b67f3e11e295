//! [`CatalogClientBuilder`]: assembles a [`CatalogClient`] from a
//! [`Config`] or from individual settings.
//!
//! Only `base_url` is mandatory; it loses any trailing slashes. TLS
//! verification can only be relaxed for https URLs.

use std::time::Duration;

use crate::auth::AuthStrategy;
use crate::client::CatalogClient;
use crate::error::{ClientError, Result};
use repotools_config::{
    Config,
    constants::{DEFAULT_MAX_PAGES, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Anonymous, 30 second timeout, and the default page cap unless told
/// otherwise.
pub struct CatalogClientBuilder {
    base_url: Option<String>,
    auth_strategy: AuthStrategy,
    skip_verify: bool,
    timeout: Duration,
    max_pages: usize,
    http: Option<reqwest::Client>,
}

impl Default for CatalogClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: AuthStrategy::Anonymous,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_pages: DEFAULT_MAX_PAGES,
            http: None,
        }
    }
}

impl CatalogClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Server root, e.g. `http://localhost:8081`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = strategy;
        self
    }

    /// Accept self-signed or otherwise invalid certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Page cap for every walk made by the built client.
    pub fn max_pages(mut self, pages: usize) -> Self {
        self.max_pages = pages;
        self
    }

    /// Reuse `http` as is; `timeout` and `skip_verify` no longer apply.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Copy every connection and auth setting from `config`.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = AuthStrategy::from(&config.auth.strategy);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_pages = config.connection.max_pages;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Fails with [`ClientError::InvalidUrl`] without a base URL and with
    /// [`ClientError::InvalidConfig`] for a zero page cap.
    pub fn build(self) -> Result<CatalogClient> {
        let Some(base_url) = self.base_url.map(Self::normalize_base_url) else {
            return Err(ClientError::InvalidUrl("no base URL configured".to_string()));
        };
        if self.max_pages == 0 {
            return Err(ClientError::InvalidConfig(
                "page cap must be at least 1".to_string(),
            ));
        }

        let http = match self.http {
            Some(http) => http,
            None => {
                let is_https = base_url.starts_with("https://");
                if self.skip_verify && !is_https {
                    tracing::warn!(base_url = %base_url, "skip_verify ignored for a plain http URL");
                }
                reqwest::Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
                    .danger_accept_invalid_certs(self.skip_verify && is_https)
                    .build()?
            }
        };

        Ok(CatalogClient {
            http,
            base_url,
            auth: self.auth_strategy,
            max_pages: self.max_pages,
        })
    }
}
