//! Configuration loading.
//!
//! This module parses the YAML (or TOML) config file, resolves secrets that
//! were left out of the file from the environment, and validates the result.

mod error;
mod file;

pub use error::ConfigError;
pub use file::{ConfigFile, JiraSection, MigrationOptions, XraySection, ZephyrSection};

use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Jira Cloud connection settings.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    /// Site base URL without trailing slash.
    pub site: String,
    /// Basic auth user.
    pub user: String,
    /// Basic auth API token.
    pub api_token: String,
    /// Atlassian account id of the migrating user.
    pub account_id: String,
}

/// Zephyr Squad Cloud connection settings.
#[derive(Debug, Clone)]
pub struct ZephyrConfig {
    /// API base URL without trailing slash.
    pub base_url: String,
    /// Access key sent with every request.
    pub access_key: String,
    /// Secret key used for request signing.
    pub secret_key: String,
}

/// Xray Cloud connection settings.
#[derive(Debug, Clone)]
pub struct XrayConfig {
    /// API base URL without trailing slash.
    pub base_url: String,
    /// API client id.
    pub client_id: String,
    /// API client secret.
    pub client_secret: String,
}

/// Fully resolved and validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub jira: JiraConfig,
    pub zephyr: ZephyrConfig,
    pub xray: XrayConfig,
    pub migration: MigrationOptions,
}

impl Config {
    /// Loads, resolves and validates a config file.
    ///
    /// The format is picked from the extension: `.yml`/`.yaml` for YAML,
    /// `.toml` for TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, a
    /// credential is missing, or a value fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading config");
        let file = read_config_file(path)?;
        Self::from_file(file, path)
    }

    /// Resolves secrets and validates an already parsed [`ConfigFile`].
    ///
    /// `path` is only used in error messages.
    pub fn from_file(file: ConfigFile, path: &Path) -> Result<Self, ConfigError> {
        let path_str = path.display().to_string();

        let config = Self {
            jira: JiraConfig {
                site: validate_base_url(&file.jira.site, "jira.site", &path_str)?,
                user: file.jira.user,
                api_token: resolve_secret(
                    file.jira.api_token,
                    "jira.api_token",
                    "JIRA_API_TOKEN",
                )?,
                account_id: file.jira.account_id,
            },
            zephyr: ZephyrConfig {
                base_url: validate_base_url(&file.zephyr.base_url, "zephyr.base_url", &path_str)?,
                access_key: resolve_secret(
                    file.zephyr.access_key,
                    "zephyr.access_key",
                    "ZAPI_ACCESS_KEY",
                )?,
                secret_key: resolve_secret(
                    file.zephyr.secret_key,
                    "zephyr.secret_key",
                    "ZAPI_SECRET_KEY",
                )?,
            },
            xray: XrayConfig {
                base_url: validate_base_url(&file.xray.base_url, "xray.base_url", &path_str)?,
                client_id: resolve_secret(
                    file.xray.client_id,
                    "xray.client_id",
                    "XRAY_CLIENT_ID",
                )?,
                client_secret: resolve_secret(
                    file.xray.client_secret,
                    "xray.client_secret",
                    "XRAY_CLIENT_SECRET",
                )?,
            },
            migration: file.migration,
        };

        validate_migration(&config.migration, &path_str)?;
        debug!(
            jira_site = %config.jira.site,
            zephyr = %config.zephyr.base_url,
            xray = %config.xray.base_url,
            "Config resolved"
        );
        Ok(config)
    }
}

/// Reads and parses the config file without resolving secrets.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let path_str = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path_str.clone(),
        source: e,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yml" | "yaml") => {
            serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlError {
                path: path_str,
                source: e,
            })
        }
        Some("toml") => toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path_str,
            source: e,
        }),
        _ => Err(ConfigError::UnsupportedFormat { path: path_str }),
    }
}

/// Picks the secret from the file, or from `env_var` when the file has none.
fn resolve_secret(
    value: Option<String>,
    field: &'static str,
    env_var: &'static str,
) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| std::env::var(env_var).ok().filter(|v| !v.trim().is_empty()))
        .ok_or(ConfigError::MissingCredential { field, env_var })
}

/// Checks that `value` is an http(s) URL and strips any trailing slash.
fn validate_base_url(value: &str, field: &str, path: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::ValidationError {
        path: path.to_string(),
        message: format!("{field} is not a valid URL ({e}): {value}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError {
            path: path.to_string(),
            message: format!("{field} must use http or https: {value}"),
        });
    }

    Ok(value.trim_end_matches('/').to_string())
}

fn validate_migration(options: &MigrationOptions, path: &str) -> Result<(), ConfigError> {
    if options.jql.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            path: path.to_string(),
            message: "migration.jql must not be empty".to_string(),
        });
    }

    if options.max_tests == 0 {
        return Err(ConfigError::ValidationError {
            path: path.to_string(),
            message: "migration.max_tests must be greater than zero".to_string(),
        });
    }

    if options.xray_test_type.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            path: path.to_string(),
            message: "migration.xray_test_type must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const YAML: &str = r#"
jira:
  site: https://example.atlassian.net/
  user: qa@example.com
  api_token: jira-token
  account_id: 5b10ac8d82e05b22cc7d4ef5
zephyr:
  base_url: https://prod-api.zephyr4jiracloud.com
  access_key: access
  secret_key: secret
xray:
  client_id: client
  client_secret: client-secret
migration:
  jql: project = CALC AND issuetype = Test
  destination_project_key: XT
  labels_to_add: [migrated]
"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_yaml_config() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "config.yml", YAML);

        let config = Config::load(&path).unwrap();

        assert_eq!(config.jira.site, "https://example.atlassian.net");
        assert_eq!(config.jira.api_token, "jira-token");
        assert_eq!(config.zephyr.secret_key, "secret");
        assert_eq!(config.xray.base_url, "https://xray.cloud.getxray.app");
        assert_eq!(
            config.migration.destination_project_key.as_deref(),
            Some("XT")
        );
        assert_eq!(config.migration.labels_to_add, vec!["migrated"]);
    }

    #[test]
    fn loads_toml_config() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "config.toml",
            r#"
[jira]
site = "https://example.atlassian.net"
user = "qa@example.com"
api_token = "jira-token"
account_id = "abc"

[zephyr]
base_url = "https://prod-api.zephyr4jiracloud.com"
access_key = "access"
secret_key = "secret"

[xray]
base_url = "https://eu.xray.cloud.getxray.app"
client_id = "client"
client_secret = "client-secret"

[migration]
jql = "project = CALC"
max_tests = 250
create_issue_links = true
preferred_issue_link_type = ""
"#,
        );

        let config = Config::load(&path).unwrap();

        assert_eq!(config.xray.base_url, "https://eu.xray.cloud.getxray.app");
        assert_eq!(config.migration.max_tests, 250);
        assert!(config.migration.create_issue_links);
        assert_eq!(config.migration.preferred_link_type(), None);
    }

    #[test]
    fn rejects_unknown_extension() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "config.json", "{}");

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();

        let result = Config::load(&temp.path().join("config.yml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn resolves_secrets_from_environment() {
        let temp = TempDir::new().unwrap();
        let yaml = YAML.replace("  secret_key: secret\n", "");
        let path = write(&temp, "config.yml", &yaml);

        let config = temp_env::with_var("ZAPI_SECRET_KEY", Some("from-env"), || {
            Config::load(&path).unwrap()
        });
        assert_eq!(config.zephyr.secret_key, "from-env");

        let result = temp_env::with_var_unset("ZAPI_SECRET_KEY", || Config::load(&path));
        assert!(matches!(
            result,
            Err(ConfigError::MissingCredential {
                env_var: "ZAPI_SECRET_KEY",
                ..
            })
        ));
    }

    #[test]
    fn file_secret_takes_precedence() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "config.yml", YAML);

        let config = temp_env::with_var("JIRA_API_TOKEN", Some("from-env"), || {
            Config::load(&path).unwrap()
        });
        assert_eq!(config.jira.api_token, "jira-token");
    }

    #[test]
    fn validation_rejects_bad_values() {
        let temp = TempDir::new().unwrap();

        let path = write(
            &temp,
            "bad-url.yml",
            &YAML.replace("https://prod-api.zephyr4jiracloud.com", "not a url"),
        );
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::ValidationError { .. })
        ));

        let path = write(
            &temp,
            "bad-jql.yml",
            &YAML.replace("jql: project = CALC AND issuetype = Test", "jql: '  '"),
        );
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::ValidationError { .. })
        ));

        let path = write(
            &temp,
            "bad-max.yml",
            &YAML.replace("  labels_to_add: [migrated]", "  max_tests: 0"),
        );
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
