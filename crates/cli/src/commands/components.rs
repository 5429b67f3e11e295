//! Components command implementation.

use anyhow::{Context, Result};
use repotools_client::{ComponentFilter, Lookup, Source};
use tracing::info;

use crate::error::NotFoundError;
use crate::formatters::OutputFormat;

/// Arguments of the `components` subcommand.
pub struct ComponentArgs {
    pub repository: String,
    pub group: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub format: Option<String>,
    pub keyword: Option<String>,
    pub browse: bool,
    pub first: bool,
}

impl ComponentArgs {
    fn filter(&self) -> ComponentFilter {
        ComponentFilter {
            repository: self.repository.clone(),
            group: self.group.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            format: self.format.clone(),
            keyword: self.keyword.clone(),
        }
    }

    fn source(&self) -> Source {
        if self.browse {
            Source::Browse
        } else {
            Source::Search
        }
    }
}

pub async fn run(
    config: repotools_config::Config,
    args: ComponentArgs,
    output_format: OutputFormat,
) -> Result<()> {
    let client = super::build_client_from_config(&config)?;
    let filter = args.filter();
    let source = args.source();

    info!(
        repository = %args.repository,
        ?source,
        "Listing components from {}",
        client.base_url()
    );

    let components = if args.first {
        match client
            .fetch_first_match(source, &filter)
            .await
            .context("Failed to look up component")?
        {
            Lookup::Found(component) => vec![component],
            Lookup::NotFound => {
                return Err(NotFoundError {
                    what: "component",
                    repository: args.repository,
                }
                .into());
            }
        }
    } else {
        client
            .fetch_all(source, &filter)
            .await
            .context("Failed to list components")?
    };

    super::print_output(output_format, |formatter| {
        formatter.format_components(&components)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_default_source() {
        let args = ComponentArgs {
            repository: "maven-releases".to_string(),
            group: Some("org.example".to_string()),
            name: Some("app".to_string()),
            version: None,
            format: None,
            keyword: None,
            browse: false,
            first: false,
        };
        assert_eq!(args.source(), Source::Search);
        assert_eq!(
            args.filter(),
            ComponentFilter::new("maven-releases").group("org.example").name("app")
        );
    }
}
