//! Workflow status model and the flat transition action set.
//!
//! The workflow is deliberately unguarded: every [`WorkflowAction`] is an
//! unconditional status assignment, applicable from any current status.
//! There is no transition table and no reachability check -- callers that
//! want a stricter graph must build one on top.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a content item.
///
/// Serialized -- and stored -- under the human-readable names the public
/// API exposes: `"Draft"`, `"In Review"`, `"Approved"`, `"Published"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentStatus {
    #[default]
    Draft,
    #[serde(rename = "In Review")]
    InReview,
    Approved,
    Published,
}

impl ContentStatus {
    /// The canonical string form, matching the database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentStatus::Draft => "Draft",
            ContentStatus::InReview => "In Review",
            ContentStatus::Approved => "Approved",
            ContentStatus::Published => "Published",
        }
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ContentStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Draft" => Ok(ContentStatus::Draft),
            "In Review" => Ok(ContentStatus::InReview),
            "Approved" => Ok(ContentStatus::Approved),
            "Published" => Ok(ContentStatus::Published),
            other => Err(CoreError::Validation(format!(
                "Unknown content status: {other}"
            ))),
        }
    }
}

/// A named workflow action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowAction {
    Submit,
    Approve,
    Reject,
    Publish,
}

impl WorkflowAction {
    /// The status this action assigns, regardless of the current one.
    pub fn target_status(self) -> ContentStatus {
        match self {
            WorkflowAction::Submit => ContentStatus::InReview,
            WorkflowAction::Approve => ContentStatus::Approved,
            WorkflowAction::Reject => ContentStatus::Draft,
            WorkflowAction::Publish => ContentStatus::Published,
        }
    }

    /// The action name as it appears in route paths and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowAction::Submit => "submit",
            WorkflowAction::Approve => "approve",
            WorkflowAction::Reject => "reject",
            WorkflowAction::Publish => "publish",
        }
    }
}
