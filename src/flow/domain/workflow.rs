//! Per-project workflow kind selection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ParseWorkflowKindError;

/// Workflow configuration a project has selected.
///
/// The enumeration mirrors the full project setting, including the
/// `DoubleCheck` kind this engine does not implement; constructing a
/// [`crate::flow::TaskFlow`] for it fails with
/// [`super::FlowError::UnsupportedWorkflow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowKind {
    /// Four shared statuses, no role gating.
    Simple,
    /// Thirteen statuses with per-role move tables.
    Advanced,
    /// Legacy selection retained in project records; not supported here.
    DoubleCheck,
}

impl WorkflowKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Advanced => "advanced",
            Self::DoubleCheck => "double_check",
        }
    }

    /// Returns `true` when this engine implements the kind.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::DoubleCheck)
    }
}

impl TryFrom<&str> for WorkflowKind {
    type Error = ParseWorkflowKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "simple" => Ok(Self::Simple),
            "advanced" => Ok(Self::Advanced),
            "double_check" => Ok(Self::DoubleCheck),
            _ => Err(ParseWorkflowKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
