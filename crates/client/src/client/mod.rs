//! [`CatalogClient`] and its listing operations.
//!
//! Pages are requested one after another, never retried, and never more
//! than `max_pages` times per walk. HTTP plumbing lives in
//! [`crate::endpoints`].

pub mod builder;

mod listing;
mod lookup;

use crate::auth::AuthStrategy;

/// Client for the catalog REST API of a repository manager.
///
/// ```rust,ignore
/// use repotools_client::{AuthStrategy, CatalogClient};
/// use secrecy::SecretString;
///
/// let client = CatalogClient::builder()
///     .base_url("http://localhost:8081".to_string())
///     .auth_strategy(AuthStrategy::Basic {
///         username: "admin".to_string(),
///         password: SecretString::new("admin123".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct CatalogClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
    pub(crate) max_pages: usize,
}

impl CatalogClient {
    pub fn builder() -> builder::CatalogClientBuilder {
        builder::CatalogClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Page cap applied to every walk.
    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    pub fn is_anonymous(&self) -> bool {
        self.auth.is_anonymous()
    }
}
