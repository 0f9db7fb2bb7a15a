//! Permitted transitions between statuses.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::role::Role;
use super::status::Status;

/// Direction of a permitted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// Forward progress toward completion.
    PushForward,
    /// Regression to an earlier stage, e.g. a failed review.
    BringBack,
}

impl MoveKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PushForward => "push_forward",
            Self::BringBack => "bring_back",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single permitted transition in a role's static move table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Departure status.
    pub from: Status,
    /// Arrival status.
    pub to: Status,
    /// Direction of the transition.
    pub kind: MoveKind,
}

impl Move {
    /// Creates a forward-progress table entry.
    #[must_use]
    pub const fn forward(from: Status, to: Status) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::PushForward,
        }
    }

    /// Creates a regression table entry.
    #[must_use]
    pub const fn back(from: Status, to: Status) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::BringBack,
        }
    }
}

/// A working-set move: a table entry tagged with the canonical role that
/// contributed it.
///
/// The tag feeds presentation only; move legality never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMove {
    /// Canonical role whose table contributed this move.
    pub role: Role,
    /// Departure status.
    pub from: Status,
    /// Arrival status.
    pub to: Status,
    /// Direction of the transition.
    pub kind: MoveKind,
}

impl RoleMove {
    /// Creates a working-set move from a table entry.
    #[must_use]
    pub const fn tagged(role: Role, m: Move) -> Self {
        Self {
            role,
            from: m.from,
            to: m.to,
            kind: m.kind,
        }
    }

    /// Returns the wire title shown on board cards, e.g.
    /// `architect_push_forward`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{}_{}", self.role.as_str(), self.kind.as_str())
    }
}
