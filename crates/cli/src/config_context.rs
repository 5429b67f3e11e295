//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Distinguish between a real connection config and a placeholder.
//! - Provide type-safe extraction of config for commands that need it.
//!
//! Does NOT handle:
//! - Configuration loading (done in `main()`).
//!
//! Invariants:
//! - Placeholder configs are never used to build a client.
//! - Real configs are validated before command execution.

/// Context for command execution, distinguishing between real and placeholder configs.
///
/// `extract` works on local files only and runs without `NEXUS_BASE_URL`.
pub(crate) enum ConfigCommandContext {
    /// A validated config loaded from environment and CLI args.
    Real(Box<repotools_config::Config>),
    /// No connection details; only valid for local commands.
    Placeholder,
}

impl ConfigCommandContext {
    /// Extract the real config, failing if this is a placeholder.
    pub(crate) fn into_real_config(self) -> anyhow::Result<repotools_config::Config> {
        match self {
            ConfigCommandContext::Real(config) => Ok(*config),
            ConfigCommandContext::Placeholder => {
                anyhow::bail!(
                    "Internal error: attempted to use placeholder config for an operation requiring real connection details"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_cannot_be_used_as_config() {
        let result = ConfigCommandContext::Placeholder.into_real_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_real_config_extracted() {
        let config = repotools_config::Config::anonymous("http://localhost:8081".to_string());
        let context = ConfigCommandContext::Real(Box::new(config));
        let config = context.into_real_config().unwrap();
        assert_eq!(config.connection.base_url, "http://localhost:8081");
    }
}
