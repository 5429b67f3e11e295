//! Single-shot HTTP request execution.
//!
//! Requests are sent exactly once. Network failures are classified into
//! transport errors; non-success statuses become `ClientError::ApiError`.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Upper bound on how much of an error body is echoed into the error message.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Sends an HTTP request and checks its status.
///
/// # Errors
///
/// - `ClientError::Timeout` / `ClientError::ConnectionRefused` / `ClientError::HttpError`
///   when no response is received.
/// - `ClientError::ApiError` when the status is not 2xx.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await.map_err(ClientError::from_transport)?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    debug!(status = status.as_u16(), %url, "Request failed");

    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string()
    } else {
        body.chars().take(MAX_ERROR_BODY_CHARS).collect()
    };

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}
