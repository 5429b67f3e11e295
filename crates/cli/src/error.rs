//! Process exit codes.
//!
//! | code | meaning |
//! |------|---------|
//! | 0 | success |
//! | 1 | anything unclassified, including bad configuration |
//! | 3 | the server could not be reached |
//! | 4 | nothing matched, or the server said 404 |
//! | 5 | the server answered with something unusable, or arguments were rejected |

use repotools_client::{ClientError, ErrorKind};
use repotools_extract::ExtractError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    /// Timeout, refused connection, DNS failure.
    ConnectionError = 3,
    NotFound = 4,
    /// Bad status, malformed body, page cap hit, rejected arguments.
    ValidationError = 5,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// A `--first` lookup that exhausted every page without a match.
#[derive(Debug, Error)]
#[error("No {what} matched in repository '{repository}'")]
pub struct NotFoundError {
    pub what: &'static str,
    pub repository: String,
}

/// A scan cut short by a read error, after the fields found so far were
/// printed.
#[derive(Debug, Error)]
#[error("Reading stopped after {units_read} unit(s); output is partial")]
pub struct PartialScanError {
    pub units_read: usize,
    #[source]
    pub source: std::io::Error,
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            _ => match err.kind() {
                ErrorKind::Transport => ExitCode::ConnectionError,
                ErrorKind::Protocol | ErrorKind::Configuration => ExitCode::ValidationError,
            },
        }
    }
}

impl From<&ExtractError> for ExitCode {
    fn from(err: &ExtractError) -> Self {
        match err {
            ExtractError::Open { .. } => ExitCode::GeneralError,
            ExtractError::InvalidOptions(_)
            | ExtractError::EmptyKey
            | ExtractError::Pattern(_) => ExitCode::ValidationError,
        }
    }
}

/// Picks the exit code from the first recognised error in a cause chain.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(extract_err) = cause.downcast_ref::<ExtractError>() {
                return ExitCode::from(extract_err);
            }
            if cause.downcast_ref::<NotFoundError>().is_some() {
                return ExitCode::NotFound;
            }
            if cause.downcast_ref::<PartialScanError>().is_some() {
                return ExitCode::GeneralError;
            }
        }

        ExitCode::GeneralError
    }
}
