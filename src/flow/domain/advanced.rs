//! Advanced workflow configuration: thirteen statuses gated by per-role
//! move tables.
//!
//! Each canonical role owns a fixed, ordered table of permitted moves
//! (forward chain first, regressions after) and a default creation status.
//! Tables keep `(from, to)` pairs unique, and at most one move from a given
//! status lands in a given lane, so lane-targeted resolution is unambiguous
//! within a role.

use super::column::{BoardColumn, ColumnKind, build_board};
use super::moves::{Move, RoleMove};
use super::role::Role;
use super::status::Status;

/// Statuses of the advanced workflow, in catalog order.
pub const STATUSES: [Status; 13] = [
    Status::Creating,
    Status::EstimationBeforeAssigning,
    Status::AssigningResponsible,
    Status::EstimationBeforePerformer,
    Status::AssigningPerformer,
    Status::EstimationBeforeToDo,
    Status::ReadyToDo,
    Status::InProgress,
    Status::ProfReview,
    Status::Testing,
    Status::ArchitectReview,
    Status::ReadyToDeploy,
    Status::Done,
];

/// Board lanes in left-to-right order: each lane appears at the catalog
/// position of its first status.
pub const LANES: [ColumnKind; 6] = [
    ColumnKind::BackLog,
    ColumnKind::Preparing,
    ColumnKind::Developing,
    ColumnKind::Reviewing,
    ColumnKind::Testing,
    ColumnKind::Finishing,
];

/// Static workflow configuration of one canonical role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleFlow {
    /// Status assigned to tasks this role creates.
    pub created_status: Status,
    /// Permitted moves, forward chain first.
    pub moves: &'static [Move],
}

const ARCHITECT_MOVES: [Move; 15] = [
    Move::forward(Status::Creating, Status::EstimationBeforeAssigning),
    Move::forward(Status::EstimationBeforeAssigning, Status::AssigningResponsible),
    Move::forward(Status::AssigningResponsible, Status::EstimationBeforePerformer),
    Move::forward(Status::EstimationBeforePerformer, Status::AssigningPerformer),
    Move::forward(Status::Testing, Status::ArchitectReview),
    Move::forward(Status::ArchitectReview, Status::ReadyToDeploy),
    Move::forward(Status::ReadyToDeploy, Status::Done),
    Move::back(Status::EstimationBeforeAssigning, Status::Creating),
    Move::back(Status::AssigningResponsible, Status::EstimationBeforeAssigning),
    Move::back(Status::EstimationBeforePerformer, Status::AssigningResponsible),
    Move::back(Status::AssigningPerformer, Status::EstimationBeforePerformer),
    Move::back(Status::ArchitectReview, Status::Testing),
    Move::back(Status::ArchitectReview, Status::EstimationBeforeToDo),
    Move::back(Status::ReadyToDeploy, Status::ArchitectReview),
    Move::back(Status::Done, Status::ArchitectReview),
];

const DEVELOPER_MOVES: [Move; 8] = [
    Move::forward(Status::AssigningPerformer, Status::ReadyToDo),
    Move::forward(Status::EstimationBeforeToDo, Status::ReadyToDo),
    Move::forward(Status::ReadyToDo, Status::InProgress),
    Move::forward(Status::InProgress, Status::ProfReview),
    Move::forward(Status::ProfReview, Status::Testing),
    Move::back(Status::AssigningPerformer, Status::EstimationBeforeAssigning),
    Move::back(Status::InProgress, Status::ReadyToDo),
    Move::back(Status::ProfReview, Status::InProgress),
];

const TESTER_MOVES: [Move; 3] = [
    Move::forward(Status::Testing, Status::ArchitectReview),
    Move::back(Status::Testing, Status::EstimationBeforeToDo),
    Move::back(Status::ReadyToDeploy, Status::Testing),
];

const ARCHITECT_FLOW: RoleFlow = RoleFlow {
    created_status: Status::Creating,
    moves: &ARCHITECT_MOVES,
};

const DEVELOPER_FLOW: RoleFlow = RoleFlow {
    created_status: Status::Creating,
    moves: &DEVELOPER_MOVES,
};

const TESTER_FLOW: RoleFlow = RoleFlow {
    created_status: Status::Creating,
    moves: &TESTER_MOVES,
};

/// Returns the static workflow configuration for a role.
///
/// Alias roles resolve to their canonical counterpart's table, keeping the
/// lookup total over the role catalog.
#[must_use]
pub const fn flow_for(role: Role) -> &'static RoleFlow {
    match role.canonical() {
        Role::Architect => &ARCHITECT_FLOW,
        Role::Tester => &TESTER_FLOW,
        Role::Developer | Role::Designer | Role::FrontendDeveloper => &DEVELOPER_FLOW,
    }
}

/// Unions the move tables of the resolved roles into a working set, tagging
/// each move with its contributing role.
///
/// Tables from different roles may contribute the same `(from, to)` pair;
/// both entries are kept, one per role.
#[must_use]
pub fn merged_moves(roles: &[Role]) -> Vec<RoleMove> {
    roles
        .iter()
        .flat_map(|&role| {
            flow_for(role)
                .moves
                .iter()
                .map(move |&m| RoleMove::tagged(role, m))
        })
        .collect()
}

/// Builds the six-lane board layout for one role from its own move table.
#[must_use]
pub fn board_for(role: Role) -> Vec<BoardColumn> {
    let moves = merged_moves(std::slice::from_ref(&role));
    build_board(&LANES, &moves)
}
