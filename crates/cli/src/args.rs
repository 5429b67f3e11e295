//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate connection settings (see `repotools_config::ConfigLoader`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "repotools")]
#[command(about = "Query a repository manager catalog and extract fields from text exports", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  repotools assets --repository raw-hosted --path bin/tool-1.0.tar.gz --first\n  repotools components --repository maven-releases --group org.example --name app -o json\n  repotools extract directory.txt --key DEUTDEFFXXX --key COBADEFFXXX\n"
)]
pub struct Cli {
    /// Base URL of the repository manager (e.g., http://localhost:8081)
    #[arg(short, long, global = true, env = "NEXUS_BASE_URL")]
    pub base_url: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, global = true, env = "NEXUS_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, global = true, env = "NEXUS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "NEXUS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum number of pages a single listing may request
    #[arg(long, global = true, env = "NEXUS_MAX_PAGES")]
    pub max_pages: Option<usize>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "NEXUS_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List assets in a repository
    Assets {
        /// Repository to list
        #[arg(short, long)]
        repository: String,

        /// Exact asset path
        #[arg(long)]
        path: Option<String>,

        /// Repository format (e.g., raw, maven2)
        #[arg(long)]
        format: Option<String>,

        /// Free-text keyword passed to the search endpoint
        #[arg(short, long, requires = "search")]
        keyword: Option<String>,

        /// Use the search endpoint instead of browsing the repository
        #[arg(long)]
        search: bool,

        /// Stop at the first matching asset
        #[arg(long)]
        first: bool,
    },

    /// Search components by coordinates
    Components {
        /// Repository to search
        #[arg(short, long)]
        repository: String,

        /// Component group
        #[arg(short, long)]
        group: Option<String>,

        /// Component name
        #[arg(short, long)]
        name: Option<String>,

        /// Component version
        #[arg(long)]
        version: Option<String>,

        /// Repository format (e.g., raw, maven2)
        #[arg(long)]
        format: Option<String>,

        /// Free-text keyword passed to the search endpoint
        #[arg(short, long, conflicts_with = "browse")]
        keyword: Option<String>,

        /// Browse the repository listing instead of using the search endpoint
        #[arg(long)]
        browse: bool,

        /// Stop at the first matching component
        #[arg(long)]
        first: bool,
    },

    /// Extract marker-anchored fields from a text file
    Extract {
        /// File to scan
        file: PathBuf,

        /// Key to extract (repeatable)
        #[arg(short, long = "key", required = true)]
        keys: Vec<String>,

        /// Marker token preceding each value
        #[arg(short, long)]
        marker: Option<String>,

        /// Maximum number of characters kept in the scan buffer
        #[arg(short, long)]
        window: Option<usize>,

        /// Read records terminated by this single ASCII character instead of lines
        #[arg(short, long)]
        delimiter: Option<char>,
    },
}

impl Commands {
    /// Check if this command talks to the repository manager.
    pub fn needs_connection(&self) -> bool {
        !matches!(self, Commands::Extract { .. })
    }
}
