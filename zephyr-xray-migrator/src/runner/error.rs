//! Runner error types.

/// Errors that end a migration run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Source errors that are not plain HTTP status errors.
    #[error(transparent)]
    Source(#[from] crate::source::SourceError),

    /// Any Xray API error.
    #[error(transparent)]
    Xray(#[from] crate::xray::XrayError),

    /// HTTP client initialization errors.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
