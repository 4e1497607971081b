//! Source API error types.

use thiserror::Error;

/// Errors raised while reading from Jira or Zephyr.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The service answered with a non-success status.
    #[error("HTTP error accessing {service}: {status} {reason}")]
    Status {
        service: &'static str,
        status: u16,
        reason: String,
        body: String,
    },

    /// The request could not be sent or its body could not be read.
    #[error("Request to {service} failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The response body is not what the service documents.
    #[error("Unexpected response from {service}: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be signed.
    #[error("Failed to sign Zephyr request: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl SourceError {
    /// Returns true for errors reported by the service itself.
    ///
    /// These end the current batch; every other source error is fatal.
    #[must_use]
    pub fn is_http_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    pub(crate) fn request(service: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| Self::Request { service, source }
    }
}

/// Turns a non-success response into [`SourceError::Status`].
pub(crate) async fn check_status(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, SourceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(SourceError::Status {
        service,
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        body,
    })
}
