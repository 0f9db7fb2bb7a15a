//! Board lanes and the per-role column layout built from move tables.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ParseColumnKindError;
use super::moves::RoleMove;
use super::role::Role;

/// A board lane grouping one or more related statuses.
///
/// Lanes are coarser than statuses: `Reviewing` spans both professional and
/// architect review. Move queries accept a lane as a fuzzy target and
/// resolve it to the concrete status the permitted move delivers into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Tasks not yet in the workflow.
    BackLog,
    /// Estimation and assignment stages.
    Preparing,
    /// Implementation stages.
    Developing,
    /// Review stages.
    Reviewing,
    /// Testing stage.
    Testing,
    /// Acceptance and completion stages.
    Finishing,
}

impl ColumnKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BackLog => "back_log",
            Self::Preparing => "preparing",
            Self::Developing => "developing",
            Self::Reviewing => "reviewing",
            Self::Testing => "testing",
            Self::Finishing => "finishing",
        }
    }
}

impl TryFrom<&str> for ColumnKind {
    type Error = ParseColumnKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "back_log" => Ok(Self::BackLog),
            "preparing" => Ok(Self::Preparing),
            "developing" => Ok(Self::Developing),
            "reviewing" => Ok(Self::Reviewing),
            "testing" => Ok(Self::Testing),
            "finishing" => Ok(Self::Finishing),
            _ => Err(ParseColumnKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lane of a compiled board: the lane key plus every working move that
/// arrives at or departs from a status in the lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    /// Lane this column represents.
    pub column: ColumnKind,
    /// Working moves touching the lane, in working-set order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moves: Vec<RoleMove>,
}

/// The column layout compiled for one viewer role.
///
/// `role` is `None` for the simple workflow, which does not discriminate by
/// role and compiles a single shared board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBoard {
    /// Viewer role the layout was compiled for.
    pub role: Option<Role>,
    /// Lanes in board order.
    pub columns: Vec<BoardColumn>,
}

/// Builds a board from a lane order and a working move set.
///
/// Every lane is seeded up front so a role that never touches a lane still
/// sees it (with no moves). Each move is then appended to the lane of its
/// arrival status and, when different, the lane of its departure status.
pub(crate) fn build_board(lanes: &[ColumnKind], moves: &[RoleMove]) -> Vec<BoardColumn> {
    let mut columns: Vec<BoardColumn> = lanes
        .iter()
        .map(|&column| BoardColumn {
            column,
            moves: Vec::new(),
        })
        .collect();

    for m in moves {
        append_to_lane(&mut columns, m.to.column(), *m);
        if m.from.column() != m.to.column() {
            append_to_lane(&mut columns, m.from.column(), *m);
        }
    }

    columns
}

fn append_to_lane(columns: &mut [BoardColumn], lane: ColumnKind, m: RoleMove) {
    if let Some(column) = columns.iter_mut().find(|c| c.column == lane) {
        column.moves.push(m);
    }
}
