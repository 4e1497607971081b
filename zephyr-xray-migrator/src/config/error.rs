//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading the migration configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("Failed to parse YAML config '{path}': {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse TOML config '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// The file extension does not map to a known format.
    #[error("Unsupported config format for '{path}': expected .yml, .yaml or .toml")]
    UnsupportedFormat { path: String },

    /// A secret is neither in the file nor in the environment.
    #[error("Missing credential '{field}': set it in the config file or via {env_var}")]
    MissingCredential {
        field: &'static str,
        env_var: &'static str,
    },

    /// Validation error in the config.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },
}
