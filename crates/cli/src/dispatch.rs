//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Extract configuration for commands that need a connection.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::ConfigCommandContext;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: ConfigCommandContext) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;

    match cli.command {
        Commands::Assets {
            repository,
            path,
            format: repo_format,
            keyword,
            search,
            first,
        } => {
            let config = config.into_real_config()?;
            commands::assets::run(
                config,
                commands::assets::AssetArgs {
                    repository,
                    path,
                    format: repo_format,
                    keyword,
                    search,
                    first,
                },
                format,
            )
            .await?;
        }
        Commands::Components {
            repository,
            group,
            name,
            version,
            format: repo_format,
            keyword,
            browse,
            first,
        } => {
            let config = config.into_real_config()?;
            commands::components::run(
                config,
                commands::components::ComponentArgs {
                    repository,
                    group,
                    name,
                    version,
                    format: repo_format,
                    keyword,
                    browse,
                    first,
                },
                format,
            )
            .await?;
        }
        Commands::Extract {
            file,
            keys,
            marker,
            window,
            delimiter,
        } => {
            commands::extract::run(file, keys, marker, window, delimiter, format).await?;
        }
    }

    Ok(())
}
