//! Raw config file deserialization.

use serde::Deserialize;

/// Top-level layout of the config file.
///
/// Secrets are optional here; they are resolved against the environment
/// when the file is turned into a [`Config`](super::Config).
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Jira Cloud site the source issues live in.
    pub jira: JiraSection,

    /// Zephyr Squad Cloud API access.
    pub zephyr: ZephyrSection,

    /// Xray Cloud API access.
    #[serde(default)]
    pub xray: XraySection,

    /// What to migrate and how.
    pub migration: MigrationOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraSection {
    /// Site base URL, e.g. `https://example.atlassian.net`.
    pub site: String,

    /// Login used for basic auth (usually an email).
    pub user: String,

    /// API token (falls back to `JIRA_API_TOKEN`).
    pub api_token: Option<String>,

    /// Atlassian account id, used as the `sub` claim of Zephyr requests.
    pub account_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZephyrSection {
    /// Zephyr API base URL.
    pub base_url: String,

    /// Access key (falls back to `ZAPI_ACCESS_KEY`).
    pub access_key: Option<String>,

    /// Secret key used to sign requests (falls back to `ZAPI_SECRET_KEY`).
    pub secret_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct XraySection {
    /// Xray Cloud base URL.
    #[serde(default = "default_xray_base_url")]
    pub base_url: String,

    /// Client id (falls back to `XRAY_CLIENT_ID`).
    pub client_id: Option<String>,

    /// Client secret (falls back to `XRAY_CLIENT_SECRET`).
    pub client_secret: Option<String>,
}

impl Default for XraySection {
    fn default() -> Self {
        Self {
            base_url: default_xray_base_url(),
            client_id: None,
            client_secret: None,
        }
    }
}

/// Options controlling which issues are migrated and how they are mapped.
#[derive(Debug, Clone, Deserialize)]
pub struct MigrationOptions {
    /// JQL selecting the source test issues.
    pub jql: String,

    /// Upper bound on the number of source issues processed in one run.
    #[serde(default = "default_max_tests")]
    pub max_tests: usize,

    /// Project to create the tests in (defaults to each source issue's project).
    #[serde(default)]
    pub destination_project_key: Option<String>,

    /// Xray test type assigned to every created test.
    #[serde(default = "default_xray_test_type")]
    pub xray_test_type: String,

    /// Labels added to every created test.
    #[serde(default)]
    pub labels_to_add: Vec<String>,

    /// Fields copied verbatim from the source issue.
    #[serde(default)]
    pub simple_fields_to_copy: Vec<String>,

    /// Fields copied as arrays from the source issue.
    #[serde(default)]
    pub multi_value_fields_to_copy: Vec<String>,

    /// Whether to recreate (at most one) issue link per test.
    #[serde(default)]
    pub create_issue_links: bool,

    /// Link type preferred when picking the link to recreate.
    ///
    /// An explicit `null` (or empty string) picks the first link regardless
    /// of its type.
    #[serde(default = "default_preferred_issue_link_type")]
    pub preferred_issue_link_type: Option<String>,

    /// Whether tests without any Zephyr step are migrated.
    #[serde(default)]
    pub migrate_tests_with_empty_steps: bool,

    /// Seconds between two import job status requests.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl MigrationOptions {
    /// Returns the preferred link type, treating an empty string as unset.
    #[must_use]
    pub fn preferred_link_type(&self) -> Option<&str> {
        self.preferred_issue_link_type
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

pub(crate) fn default_xray_base_url() -> String {
    "https://xray.cloud.getxray.app".to_string()
}

pub(crate) fn default_max_tests() -> usize {
    1000
}

pub(crate) fn default_xray_test_type() -> String {
    "Manual".to_string()
}

pub(crate) fn default_preferred_issue_link_type() -> Option<String> {
    Some("Test".to_string())
}

pub(crate) fn default_poll_interval_secs() -> u64 {
    5
}
