//! Data models for repository manager API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod asset;
pub mod common;
pub mod component;
pub mod filter;

pub use asset::{Asset, Checksum};
pub use common::{Lookup, Page};
pub use component::Component;
pub use filter::{AssetFilter, ComponentFilter, ItemFilter, Source};
