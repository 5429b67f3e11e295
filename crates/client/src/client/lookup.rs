//! Single-item lookups for [`CatalogClient`].

use crate::client::CatalogClient;
use crate::error::Result;
use crate::models::{Asset, AssetFilter, Component, ComponentFilter, Lookup, Source};

impl CatalogClient {
    /// Find an asset by its exact path within a repository.
    ///
    /// Browses the repository listing, since the search endpoint cannot
    /// filter on path.
    pub async fn find_asset_by_path(&self, repository: &str, path: &str) -> Result<Lookup<Asset>> {
        let filter = AssetFilter::new(repository).path(path);
        self.fetch_first_match(Source::Browse, &filter).await
    }

    /// Find a component by its coordinates.
    ///
    /// `group` and `version` may be omitted for formats that lack them; an
    /// omitted coordinate is not constrained.
    pub async fn find_component(
        &self,
        repository: &str,
        group: Option<&str>,
        name: &str,
        version: Option<&str>,
    ) -> Result<Lookup<Component>> {
        let mut filter = ComponentFilter::new(repository).name(name);
        filter.group = group.map(str::to_owned);
        filter.version = version.map(str::to_owned);
        self.fetch_first_match(Source::Search, &filter).await
    }
}
