//! Jira issue types as returned by the search API.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One page of a JQL search.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub issues: Vec<SourceIssue>,
}

/// A source test issue.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceIssue {
    /// Numeric issue id (as a string, the way Jira returns it).
    pub id: String,

    /// Issue key, e.g. `CALC-12`.
    pub key: String,

    pub fields: IssueFields,
}

impl SourceIssue {
    /// Returns a field by its Jira name, looking at custom fields as well.
    ///
    /// Only the fields the migrator copies generically are reachable; the
    /// typed ones (summary, labels, ...) are read directly.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.other.get(name)
    }
}

/// Fields of a source issue.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueFields {
    pub project: ProjectRef,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub priority: Option<Priority>,

    #[serde(default)]
    pub components: Vec<NamedRef>,

    #[serde(default)]
    pub fix_versions: Vec<NamedRef>,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub issuelinks: Vec<IssueLink>,

    /// Every other field (custom fields included), kept as raw JSON.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Priority {
    pub id: String,
}

/// Anything Jira references by name (components, versions).
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

/// A directional link between this issue and another one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLink {
    #[serde(rename = "type")]
    pub link_type: IssueLinkType,
    #[serde(default)]
    pub inward_issue: Option<LinkedIssue>,
    #[serde(default)]
    pub outward_issue: Option<LinkedIssue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueLinkType {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkedIssue {
    pub key: String,
}
