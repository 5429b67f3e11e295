//! `repotools`: list and look up catalog items on a repository manager,
//! and pull marker-tagged fields out of large text exports.
//!
//! `.env` is read before argument parsing so it can feed clap's `env`
//! defaults. Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use config_context::ConfigCommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use repotools_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_context = if cli.command.needs_connection() {
        match build_config(&cli) {
            Ok(config) => ConfigCommandContext::Real(Box::new(config)),
            Err(e) => {
                eprintln!("Failed to build configuration: {:#}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        ConfigCommandContext::Placeholder
    };

    let exit_code = match run_command(cli, config_context).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Environment first, then flags on top.
fn build_config(cli: &Cli) -> anyhow::Result<repotools_config::Config> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if let Some(max_pages) = cli.max_pages {
        loader = loader.with_max_pages(max_pages);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    let config = loader.build()?;
    if config.connection.skip_verify {
        tracing::warn!("TLS certificate verification is disabled");
    }
    Ok(config)
}
