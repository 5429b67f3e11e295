//! Authentication strategies.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with the repository manager.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// HTTP basic credentials, attached to every request.
    Basic {
        username: String,
        password: SecretString,
    },
    /// No credentials.
    Anonymous,
}

impl AuthStrategy {
    /// Attach this strategy's credentials to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Self::Anonymous => builder,
        }
    }

    /// Check if requests go out without credentials.
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

impl From<&repotools_config::AuthStrategy> for AuthStrategy {
    fn from(strategy: &repotools_config::AuthStrategy) -> Self {
        match strategy {
            repotools_config::AuthStrategy::Basic { username, password } => Self::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            repotools_config::AuthStrategy::Anonymous => Self::Anonymous,
        }
    }
}
