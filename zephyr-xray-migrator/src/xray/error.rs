//! Xray API error types.

use thiserror::Error;

/// Errors raised by the Xray Cloud API.
#[derive(Debug, Error)]
pub enum XrayError {
    /// Xray answered with a non-success status.
    #[error("Xray API error {status}: {body}")]
    Status { status: u16, body: String },

    /// The request could not be sent or its body could not be read.
    #[error("Request to Xray failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A response body did not have the documented shape.
    #[error("Unexpected Xray response ({source}): {body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// An API call was made before authenticating.
    #[error("Not authenticated against Xray")]
    NotAuthenticated,
}
