//! CLI command implementations.

pub mod assets;
pub mod components;
pub mod extract;

use anyhow::{Context, Result};
use repotools_client::CatalogClient;

use crate::formatters::{OutputFormat, get_formatter};

/// Build a catalog client from a validated config.
pub fn build_client_from_config(config: &repotools_config::Config) -> Result<CatalogClient> {
    CatalogClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build client")
}

/// Print formatted output to stdout.
fn print_output<F>(format: OutputFormat, render: F) -> Result<()>
where
    F: FnOnce(&dyn crate::formatters::Formatter) -> Result<String>,
{
    let formatter = get_formatter(format);
    let output = render(formatter.as_ref())?;
    print!("{}", output);
    Ok(())
}
