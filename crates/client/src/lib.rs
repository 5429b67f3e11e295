//! Repository manager REST API client.
//!
//! This crate provides a type-safe client for the listing endpoints of a
//! Nexus Repository 3 server: plain repository browsing and search, both
//! paginated with continuation tokens.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::CatalogClient;
pub use client::builder::CatalogClientBuilder;
pub use error::{ClientError, ErrorKind, Result};
pub use models::{
    Asset, AssetFilter, Checksum, Component, ComponentFilter, ItemFilter, Lookup, Page, Source,
};
