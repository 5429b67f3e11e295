//! [`ConfigLoader`]: collects connection settings layer by layer and
//! validates them once in [`ConfigLoader::build`].
//!
//! Layers apply in call order, so `from_env()` followed by `with_*()` lets
//! command-line values win over the environment. A `.env` file is only read
//! when `load_dotenv()` is called and `DOTENV_DISABLED` is not `1`/`true`.

use secrecy::SecretString;
use std::time::Duration;

use super::env::read_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

#[derive(Default)]
pub struct ConfigLoader {
    pub(super) base_url: Option<String>,
    pub(super) username: Option<String>,
    pub(super) password: Option<SecretString>,
    pub(super) skip_verify: Option<bool>,
    pub(super) timeout: Option<Duration>,
    pub(super) max_pages: Option<usize>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export the variables of `./.env` into the process environment.
    ///
    /// A missing file is not an error. A file that cannot be parsed yields
    /// [`ConfigError::DotenvParse`] without echoing its contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        let disabled = std::env::var("DOTENV_DISABLED")
            .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
        if disabled {
            tracing::debug!("DOTENV_DISABLED is set; not reading .env");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Read .env"),
            Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        Ok(self)
    }

    /// Overlay every `NEXUS_*` variable that is set.
    pub fn from_env(self) -> Result<Self, ConfigError> {
        Ok(self.overlay(read_env()?))
    }

    fn overlay(self, top: Self) -> Self {
        Self {
            base_url: top.base_url.or(self.base_url),
            username: top.username.or(self.username),
            password: top.password.or(self.password),
            skip_verify: top.skip_verify.or(self.skip_verify),
            timeout: top.timeout.or(self.timeout),
            max_pages: top.max_pages.or(self.max_pages),
        }
    }

    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Upper bound on pages requested by one listing walk.
    pub fn with_max_pages(mut self, pages: usize) -> Self {
        self.max_pages = Some(pages);
        self
    }

    /// Validate the collected settings and produce a [`Config`].
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = match self.base_url.as_deref().map(str::trim) {
            None | Some("") => return Err(ConfigError::MissingBaseUrl),
            Some(raw) => normalize_base_url(raw)?,
        };

        let strategy = match (self.username, self.password) {
            (Some(username), Some(password)) => AuthStrategy::Basic { username, password },
            (None, None) => AuthStrategy::Anonymous,
            (Some(_), None) => return Err(ConfigError::IncompleteCredentials("username")),
            (None, Some(_)) => return Err(ConfigError::IncompleteCredentials("password")),
        };

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if !(1..=MAX_TIMEOUT_SECS).contains(&timeout.as_secs()) {
            return Err(ConfigError::InvalidTimeout {
                secs: timeout.as_secs(),
            });
        }

        let max_pages = self.max_pages.unwrap_or(DEFAULT_MAX_PAGES);
        if max_pages == 0 {
            return Err(ConfigError::InvalidMaxPages);
        }

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
                max_pages,
            },
            auth: AuthConfig { strategy },
        })
    }
}

/// Parse `raw` as an absolute http(s) URL and strip trailing slashes.
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        var: "base_url".into(),
        message,
    };

    let parsed = url::Url::parse(raw)
        .map_err(|e| invalid(format!("{e} (expected something like http://localhost:8081)")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("scheme must be http or https, got {other}"))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("URL has no host".into()));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_owned())
}
