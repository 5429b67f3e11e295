//! Error types for the repository manager client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Broad failure category of a [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced an HTTP response (timeout, refused, DNS).
    Transport,
    /// The server answered, but not with a usable listing.
    Protocol,
    /// The client was misconfigured before any request was sent.
    Configuration,
}

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network-level HTTP failure not covered by a more specific variant.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request exceeded the per-request timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Connection could not be established.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// Non-success status from the server.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Body was not JSON, lacked an `items` array, or held malformed items.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The server kept returning continuation tokens past the page cap.
    #[error("Pagination exceeded {0} pages without reaching the last page")]
    PageLimitExceeded(usize),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Builder option out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Classify a `reqwest` failure raised while sending a request.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());

        if err.is_timeout() {
            Self::Timeout(url)
        } else if err.is_connect() {
            Self::ConnectionRefused(url)
        } else {
            Self::HttpError(err)
        }
    }

    /// Failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::HttpError(e) if e.is_builder() => ErrorKind::Configuration,
            Self::HttpError(_) | Self::Timeout(_) | Self::ConnectionRefused(_) => {
                ErrorKind::Transport
            }
            Self::ApiError { .. } | Self::InvalidResponse(_) | Self::PageLimitExceeded(_) => {
                ErrorKind::Protocol
            }
            Self::InvalidUrl(_) | Self::InvalidConfig(_) => ErrorKind::Configuration,
        }
    }

    /// Check if this is a network-level failure.
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// Check if the server responded with something unusable.
    pub fn is_protocol(&self) -> bool {
        self.kind() == ErrorKind::Protocol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_variants_classified() {
        assert_eq!(
            ClientError::Timeout("http://localhost:8081".to_string()).kind(),
            ErrorKind::Transport
        );
        assert!(ClientError::ConnectionRefused("http://localhost:8081".to_string()).is_transport());
    }

    #[test]
    fn test_protocol_variants_classified() {
        let err = ClientError::ApiError {
            status: 500,
            url: "http://localhost:8081/service/rest/v1/assets".to_string(),
            message: "boom".to_string(),
        };
        assert!(err.is_protocol());
        assert!(ClientError::InvalidResponse("no items".to_string()).is_protocol());
        assert!(ClientError::PageLimitExceeded(10).is_protocol());
    }

    #[test]
    fn test_invalid_url_is_configuration() {
        let err = ClientError::InvalidUrl("base_url is required".to_string());
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(!err.is_transport());
        assert!(!err.is_protocol());
    }

    #[test]
    fn test_api_error_display() {
        let err = ClientError::ApiError {
            status: 404,
            url: "http://localhost:8081/service/rest/v1/assets".to_string(),
            message: "Repository not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (404) at http://localhost:8081/service/rest/v1/assets: Repository not found"
        );
    }
}
