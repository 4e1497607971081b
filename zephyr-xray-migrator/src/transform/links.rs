//! Issue link selection.
//!
//! Jira accepts a single link in the `update` block of a create request, so
//! a migrated test keeps at most one of its source links.

use crate::source::IssueLink;
use crate::xray::{IssueLinkAdd, IssueLinkUpdate, KeyRef, NameRef, TestUpdate};

/// Picks the link to recreate.
///
/// Without a preferred type the first link is used; otherwise the first link
/// of that type, or none.
#[must_use]
pub fn select_issue_link<'a>(
    links: &'a [IssueLink],
    preferred_type: Option<&str>,
) -> Option<&'a IssueLink> {
    match preferred_type {
        None => links.first(),
        Some(name) => links.iter().find(|link| link.link_type.name == name),
    }
}

/// Builds the single-link update block for `link`.
#[must_use]
pub fn link_update(link: &IssueLink) -> TestUpdate {
    TestUpdate {
        issuelinks: vec![IssueLinkUpdate {
            add: IssueLinkAdd {
                link_type: NameRef {
                    name: link.link_type.name.clone(),
                },
                inward_issue: link.inward_issue.as_ref().map(|issue| KeyRef {
                    key: issue.key.clone(),
                }),
                outward_issue: link.outward_issue.as_ref().map(|issue| KeyRef {
                    key: issue.key.clone(),
                }),
            },
        }],
    }
}
