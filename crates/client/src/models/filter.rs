//! Listing filters and the local re-check applied to every returned item.
//!
//! # Invariants
//! - Every equality predicate set on a filter is re-checked locally against
//!   each returned item; the server-side filter is only a hint.
//! - `keyword` is a server-side full-text hint and is never re-checked.
//! - An item lacking a field that a predicate names does not match.

use serde::de::DeserializeOwned;

use super::asset::Asset;
use super::component::Component;

/// Which family of endpoints serves a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    /// Plain repository listing; only `repository` is sent, every predicate
    /// is applied locally.
    #[default]
    Browse,
    /// Search endpoint; predicates are sent as query parameters and
    /// re-checked locally.
    Search,
}

/// A filter over one kind of catalog item.
pub trait ItemFilter {
    /// The item type this filter selects.
    type Item: DeserializeOwned;

    /// Endpoint path for [`Source::Browse`].
    const BROWSE_PATH: &'static str;

    /// Endpoint path for [`Source::Search`].
    const SEARCH_PATH: &'static str;

    /// Repository the listing is scoped to.
    fn repository(&self) -> &str;

    /// Query parameters beyond `repository` sent to the search endpoint.
    fn search_params(&self) -> Vec<(&'static str, String)>;

    /// Local equality re-check.
    fn matches(&self, item: &Self::Item) -> bool;

    /// Endpoint path for the given source.
    fn endpoint(source: Source) -> &'static str {
        match source {
            Source::Browse => Self::BROWSE_PATH,
            Source::Search => Self::SEARCH_PATH,
        }
    }
}

/// `true` when the predicate is unset or equals the item's value.
fn predicate_holds(expected: Option<&str>, actual: Option<&str>) -> bool {
    match expected {
        None => true,
        Some(expected) => actual == Some(expected),
    }
}

fn push_param(params: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        params.push((key, value.clone()));
    }
}

/// Filter over assets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetFilter {
    pub repository: String,
    pub path: Option<String>,
    pub format: Option<String>,
    pub keyword: Option<String>,
}

impl AssetFilter {
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            ..Self::default()
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
}

impl ItemFilter for AssetFilter {
    type Item = Asset;

    const BROWSE_PATH: &'static str = "/service/rest/v1/assets";
    const SEARCH_PATH: &'static str = "/service/rest/v1/search/assets";

    fn repository(&self) -> &str {
        &self.repository
    }

    fn search_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_param(&mut params, "format", &self.format);
        push_param(&mut params, "q", &self.keyword);
        params
    }

    fn matches(&self, item: &Asset) -> bool {
        predicate_holds(self.path.as_deref(), Some(item.path.as_str()))
            && predicate_holds(self.format.as_deref(), item.format.as_deref())
    }
}

/// Filter over components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentFilter {
    pub repository: String,
    pub group: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub format: Option<String>,
    pub keyword: Option<String>,
}

impl ComponentFilter {
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            ..Self::default()
        }
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
}

impl ItemFilter for ComponentFilter {
    type Item = Component;

    const BROWSE_PATH: &'static str = "/service/rest/v1/components";
    const SEARCH_PATH: &'static str = "/service/rest/v1/search";

    fn repository(&self) -> &str {
        &self.repository
    }

    fn search_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_param(&mut params, "group", &self.group);
        push_param(&mut params, "name", &self.name);
        push_param(&mut params, "version", &self.version);
        push_param(&mut params, "format", &self.format);
        push_param(&mut params, "q", &self.keyword);
        params
    }

    fn matches(&self, item: &Component) -> bool {
        predicate_holds(self.group.as_deref(), item.group.as_deref())
            && predicate_holds(self.name.as_deref(), Some(item.name.as_str()))
            && predicate_holds(self.version.as_deref(), item.version.as_deref())
            && predicate_holds(self.format.as_deref(), item.format.as_deref())
    }
}
