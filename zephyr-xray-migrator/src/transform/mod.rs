//! Mapping of a Zephyr test onto an Xray test definition.

mod labels;
mod links;

pub use labels::merge_labels;
pub use links::{link_update, select_issue_link};

use crate::config::MigrationOptions;
use crate::source::{SourceIssue, SourceStep};
use crate::xray::{IdRef, KeyRef, NameRef, TestFields, TestPayload, TestStep};
use serde_json::{Map, Value};
use tracing::debug;

/// Placeholder action for steps whose action text is empty.
pub const EMPTY_ACTION: &str = "<empty>";

/// Mapping options, taken from the `migration` config section.
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub test_type: String,
    pub destination_project_key: Option<String>,
    pub labels_to_add: Vec<String>,
    pub simple_fields_to_copy: Vec<String>,
    pub multi_value_fields_to_copy: Vec<String>,
    pub create_issue_links: bool,
    pub preferred_link_type: Option<String>,
    pub migrate_tests_with_empty_steps: bool,
}

impl From<&MigrationOptions> for TransformOptions {
    fn from(options: &MigrationOptions) -> Self {
        Self {
            test_type: options.xray_test_type.clone(),
            destination_project_key: options.destination_project_key.clone(),
            labels_to_add: options.labels_to_add.clone(),
            simple_fields_to_copy: options.simple_fields_to_copy.clone(),
            multi_value_fields_to_copy: options.multi_value_fields_to_copy.clone(),
            create_issue_links: options.create_issue_links,
            preferred_link_type: options.preferred_link_type().map(str::to_owned),
            migrate_tests_with_empty_steps: options.migrate_tests_with_empty_steps,
        }
    }
}

/// Decides whether a test with the given Zephyr steps is migrated.
///
/// Tests without a step list are never migrated. Tests with an empty step
/// list are migrated only when `migrate_empty` is set.
#[must_use]
pub fn should_migrate(steps: Option<&[SourceStep]>, migrate_empty: bool) -> bool {
    match steps {
        None => false,
        Some([]) => migrate_empty,
        Some(_) => true,
    }
}

/// Builds the Xray test definition for a source issue and its steps.
#[must_use]
pub fn build_test_payload(
    issue: &SourceIssue,
    steps: &[SourceStep],
    options: &TransformOptions,
) -> TestPayload {
    let fields = &issue.fields;
    let project_key = options
        .destination_project_key
        .clone()
        .unwrap_or_else(|| fields.project.key.clone());

    let mut copied = Map::new();
    for name in &options.simple_fields_to_copy {
        match issue.field(name) {
            Some(Value::Null) | None => {}
            Some(value) => {
                copied.insert(name.clone(), value.clone());
            }
        }
    }
    for name in &options.multi_value_fields_to_copy {
        match issue.field(name) {
            Some(Value::Null) | None => {}
            Some(Value::Array(values)) => {
                copied.insert(name.clone(), Value::Array(values.clone()));
            }
            Some(value) => {
                copied.insert(name.clone(), Value::Array(vec![value.clone()]));
            }
        }
    }

    let update = if options.create_issue_links {
        select_issue_link(&fields.issuelinks, options.preferred_link_type.as_deref())
            .map(link_update)
    } else {
        None
    };

    let payload = TestPayload {
        testtype: options.test_type.clone(),
        steps: steps.iter().map(convert_step).collect(),
        fields: TestFields {
            summary: fields.summary.clone(),
            description: fields.description.clone(),
            project: KeyRef { key: project_key },
            labels: merge_labels(&fields.labels, &options.labels_to_add),
            priority: fields.priority.as_ref().map(|priority| IdRef {
                id: priority.id.clone(),
            }),
            components: fields
                .components
                .iter()
                .map(|component| NameRef {
                    name: component.name.clone(),
                })
                .collect(),
            fix_versions: fields
                .fix_versions
                .iter()
                .map(|version| NameRef {
                    name: version.name.clone(),
                })
                .collect(),
            copied,
        },
        update,
    };

    debug!(
        key = %issue.key,
        steps = payload.steps.len(),
        links = payload.link_count(),
        test = %serde_json::to_string(&payload).unwrap_or_default(),
        "Built test payload"
    );
    payload
}

fn convert_step(step: &SourceStep) -> TestStep {
    let action = step
        .step
        .as_deref()
        .filter(|action| !action.is_empty())
        .unwrap_or(EMPTY_ACTION);
    TestStep {
        action: action.to_string(),
        data: step.data.clone().unwrap_or_default(),
        result: step.result.clone().unwrap_or_default(),
    }
}
