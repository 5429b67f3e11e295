//! Errors raised while assembling a [`Config`](crate::Config).
//!
//! Dotenv failures carry only a position or an I/O kind, never the text of
//! the offending line.

use std::io;
use thiserror::Error;

use crate::constants::MAX_TIMEOUT_SECS;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Base URL is required. Set NEXUS_BASE_URL or pass --base-url.")]
    MissingBaseUrl,

    /// Only one half of a username/password pair was supplied.
    #[error("Incomplete credentials: {0} is set but its counterpart is missing")]
    IncompleteCredentials(&'static str),

    #[error("Request timeout of {secs}s is out of range (allowed: 1..={max}s)", max = MAX_TIMEOUT_SECS)]
    InvalidTimeout { secs: u64 },

    #[error("Page limit must be at least 1")]
    InvalidMaxPages,

    /// The `.env` file has a syntax error at `error_index`.
    #[error(
        "Malformed .env file near position {error_index}; fix it or set DOTENV_DISABLED=1 to ignore it"
    )]
    DotenvParse { error_index: usize },

    #[error("Could not read .env file: {kind}")]
    DotenvIo { kind: io::ErrorKind },

    #[error("Could not load .env file")]
    DotenvUnknown,
}

impl From<dotenvy::Error> for ConfigError {
    fn from(err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::LineParse(_, error_index) => Self::DotenvParse { error_index },
            dotenvy::Error::Io(io_err) => Self::DotenvIo {
                kind: io_err.kind(),
            },
            _ => Self::DotenvUnknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotenv_parse_error_hides_line() {
        let err = ConfigError::from(dotenvy::Error::LineParse(
            "NEXUS_PASSWORD='hunter2".to_string(),
            15,
        ));
        let message = err.to_string();
        assert!(message.contains("15"));
        assert!(!message.contains("hunter2"));
    }

    #[test]
    fn test_timeout_message_names_range() {
        let err = ConfigError::InvalidTimeout { secs: 0 };
        assert_eq!(
            err.to_string(),
            "Request timeout of 0s is out of range (allowed: 1..=3600s)"
        );
    }
}
