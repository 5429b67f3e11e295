//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use repotools_client::testing::{load_fixture, page_body};

#[allow(unused_imports)]
pub use repotools_client::{
    AssetFilter, CatalogClient, ClientError, ComponentFilter, Lookup, Source,
};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build an anonymous client pointed at a mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

/// Build an anonymous client with a page cap.
#[allow(dead_code)]
pub fn client_with_cap(server: &MockServer, max_pages: usize) -> CatalogClient {
    CatalogClient::builder()
        .base_url(server.uri())
        .max_pages(max_pages)
        .build()
        .expect("client should build")
}
