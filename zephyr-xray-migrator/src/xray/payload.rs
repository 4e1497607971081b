//! Xray bulk import request types.

use serde::Serialize;
use serde_json::{Map, Value};

/// One test definition of a bulk import request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestPayload {
    /// Xray test type, e.g. `Manual`.
    pub testtype: String,

    pub steps: Vec<TestStep>,

    pub fields: TestFields,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<TestUpdate>,
}

impl TestPayload {
    /// Number of issue links the payload will create.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.update
            .as_ref()
            .map_or(0, |update| update.issuelinks.len())
    }
}

/// A manual test step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestStep {
    pub action: String,
    pub data: String,
    pub result: String,
}

/// Jira fields of the created test issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestFields {
    pub summary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub project: KeyRef,

    pub labels: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<IdRef>,

    pub components: Vec<NameRef>,

    pub fix_versions: Vec<NameRef>,

    /// Fields copied from the source issue as-is.
    #[serde(flatten)]
    pub copied: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyRef {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRef {
    pub name: String,
}

/// Update block of a test definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestUpdate {
    pub issuelinks: Vec<IssueLinkUpdate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueLinkUpdate {
    pub add: IssueLinkAdd,
}

/// Instruction to create one issue link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLinkAdd {
    #[serde(rename = "type")]
    pub link_type: NameRef,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inward_issue: Option<KeyRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outward_issue: Option<KeyRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_in_bulk_import_shape() {
        let mut copied = Map::new();
        copied.insert("customfield_10010".to_string(), json!("smoke"));

        let payload = TestPayload {
            testtype: "Manual".to_string(),
            steps: vec![TestStep {
                action: "open".to_string(),
                data: String::new(),
                result: "opened".to_string(),
            }],
            fields: TestFields {
                summary: "Sum".to_string(),
                description: None,
                project: KeyRef {
                    key: "XT".to_string(),
                },
                labels: vec!["a".to_string()],
                priority: Some(IdRef {
                    id: "3".to_string(),
                }),
                components: vec![],
                fix_versions: vec![NameRef {
                    name: "1.0".to_string(),
                }],
                copied,
            },
            update: Some(TestUpdate {
                issuelinks: vec![IssueLinkUpdate {
                    add: IssueLinkAdd {
                        link_type: NameRef {
                            name: "Test".to_string(),
                        },
                        inward_issue: None,
                        outward_issue: Some(KeyRef {
                            key: "CALC-1".to_string(),
                        }),
                    },
                }],
            }),
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "testtype": "Manual",
                "steps": [{ "action": "open", "data": "", "result": "opened" }],
                "fields": {
                    "summary": "Sum",
                    "project": { "key": "XT" },
                    "labels": ["a"],
                    "priority": { "id": "3" },
                    "components": [],
                    "fixVersions": [{ "name": "1.0" }],
                    "customfield_10010": "smoke"
                },
                "update": {
                    "issuelinks": [{
                        "add": { "type": { "name": "Test" }, "outwardIssue": { "key": "CALC-1" } }
                    }]
                }
            })
        );
        assert_eq!(payload.link_count(), 1);
    }
}
