//! Assets command implementation.

use anyhow::{Context, Result};
use repotools_client::{AssetFilter, Lookup, Source};
use tracing::info;

use crate::error::NotFoundError;
use crate::formatters::OutputFormat;

/// Arguments of the `assets` subcommand.
pub struct AssetArgs {
    pub repository: String,
    pub path: Option<String>,
    pub format: Option<String>,
    pub keyword: Option<String>,
    pub search: bool,
    pub first: bool,
}

impl AssetArgs {
    fn filter(&self) -> AssetFilter {
        AssetFilter {
            repository: self.repository.clone(),
            path: self.path.clone(),
            format: self.format.clone(),
            keyword: self.keyword.clone(),
        }
    }

    fn source(&self) -> Source {
        if self.search {
            Source::Search
        } else {
            Source::Browse
        }
    }
}

pub async fn run(
    config: repotools_config::Config,
    args: AssetArgs,
    output_format: OutputFormat,
) -> Result<()> {
    let client = super::build_client_from_config(&config)?;
    let filter = args.filter();
    let source = args.source();

    info!(
        repository = %args.repository,
        ?source,
        "Listing assets from {}",
        client.base_url()
    );

    let assets = if args.first {
        match client
            .fetch_first_match(source, &filter)
            .await
            .context("Failed to look up asset")?
        {
            Lookup::Found(asset) => vec![asset],
            Lookup::NotFound => {
                return Err(NotFoundError {
                    what: "asset",
                    repository: args.repository,
                }
                .into());
            }
        }
    } else {
        client
            .fetch_all(source, &filter)
            .await
            .context("Failed to list assets")?
    };

    super::print_output(output_format, |formatter| formatter.format_assets(&assets))
}
