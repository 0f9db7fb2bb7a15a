//! Task status catalog shared by both workflow kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ParseStatusError;
use super::column::ColumnKind;

/// A named stage a task occupies on the board.
///
/// The catalog is closed and ordered: declaration order is left-to-right
/// board order, exposed as an ordinal by [`Status::position`]. The simple
/// workflow uses the four-status subset in [`super::simple`]; the advanced
/// workflow uses all thirteen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Task exists but has not entered the workflow.
    Creating,
    /// Effort is being estimated before a responsible is chosen.
    EstimationBeforeAssigning,
    /// A responsible is being chosen.
    AssigningResponsible,
    /// Effort is being estimated before a performer is chosen.
    EstimationBeforePerformer,
    /// A performer is being chosen.
    AssigningPerformer,
    /// The performer re-estimates work sent back to development.
    EstimationBeforeToDo,
    /// Estimated and waiting for work to start.
    ReadyToDo,
    /// Actively being worked on.
    InProgress,
    /// Awaiting professional (peer) review.
    ProfReview,
    /// Being tested.
    Testing,
    /// Awaiting architect review.
    ArchitectReview,
    /// Accepted and waiting for deployment.
    ReadyToDeploy,
    /// Completed.
    Done,
}

impl Status {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Creating => "creating",
            Self::EstimationBeforeAssigning => "estimation_before_assigning",
            Self::AssigningResponsible => "assigning_responsible",
            Self::EstimationBeforePerformer => "estimation_before_performer",
            Self::AssigningPerformer => "assigning_performer",
            Self::EstimationBeforeToDo => "estimation_before_to_do",
            Self::ReadyToDo => "ready_to_do",
            Self::InProgress => "in_progress",
            Self::ProfReview => "prof_review",
            Self::Testing => "testing",
            Self::ArchitectReview => "architect_review",
            Self::ReadyToDeploy => "ready_to_deploy",
            Self::Done => "done",
        }
    }

    /// Returns the ordinal position of this status in the catalog.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Creating => 0,
            Self::EstimationBeforeAssigning => 1,
            Self::AssigningResponsible => 2,
            Self::EstimationBeforePerformer => 3,
            Self::AssigningPerformer => 4,
            Self::EstimationBeforeToDo => 5,
            Self::ReadyToDo => 6,
            Self::InProgress => 7,
            Self::ProfReview => 8,
            Self::Testing => 9,
            Self::ArchitectReview => 10,
            Self::ReadyToDeploy => 11,
            Self::Done => 12,
        }
    }

    /// Returns the board lane this status belongs to.
    #[must_use]
    pub const fn column(self) -> ColumnKind {
        match self {
            Self::Creating => ColumnKind::BackLog,
            Self::EstimationBeforeAssigning
            | Self::AssigningResponsible
            | Self::EstimationBeforePerformer
            | Self::AssigningPerformer => ColumnKind::Preparing,
            Self::EstimationBeforeToDo | Self::ReadyToDo | Self::InProgress => {
                ColumnKind::Developing
            }
            Self::ProfReview | Self::ArchitectReview => ColumnKind::Reviewing,
            Self::Testing => ColumnKind::Testing,
            Self::ReadyToDeploy | Self::Done => ColumnKind::Finishing,
        }
    }

    /// Returns `true` when no further work can be started from this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for Status {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "creating" => Ok(Self::Creating),
            "estimation_before_assigning" => Ok(Self::EstimationBeforeAssigning),
            "assigning_responsible" => Ok(Self::AssigningResponsible),
            "estimation_before_performer" => Ok(Self::EstimationBeforePerformer),
            "assigning_performer" => Ok(Self::AssigningPerformer),
            "estimation_before_to_do" => Ok(Self::EstimationBeforeToDo),
            "ready_to_do" => Ok(Self::ReadyToDo),
            "in_progress" => Ok(Self::InProgress),
            "prof_review" => Ok(Self::ProfReview),
            "testing" => Ok(Self::Testing),
            "architect_review" => Ok(Self::ArchitectReview),
            "ready_to_deploy" => Ok(Self::ReadyToDeploy),
            "done" => Ok(Self::Done),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
