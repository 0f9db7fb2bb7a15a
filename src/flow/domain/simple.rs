//! Simple workflow configuration: four shared statuses, no role gating.
//!
//! The adjacency relation is fixed and role-independent: every ordered pair
//! of catalog statuses is permitted except the regression from [`Status::Done`]
//! back to [`Status::Creating`]. Reopening finished work into any later
//! stage stays possible.

use super::column::{BoardColumn, ColumnKind, build_board};
use super::status::Status;

/// Statuses of the simple workflow, in board order.
pub const STATUSES: [Status; 4] = [
    Status::Creating,
    Status::ReadyToDo,
    Status::Testing,
    Status::Done,
];

/// Default creation status when the caller does not request one.
pub const CREATED_STATUS: Status = Status::ReadyToDo;

/// Returns `true` when the status belongs to the simple catalog.
#[must_use]
pub const fn contains(status: Status) -> bool {
    matches!(
        status,
        Status::Creating | Status::ReadyToDo | Status::Testing | Status::Done
    )
}

/// Returns `true` when the simple adjacency relation permits `from → to`.
#[must_use]
pub const fn is_permitted(from: Status, to: Status) -> bool {
    contains(from) && contains(to) && !matches!((from, to), (Status::Done, Status::Creating))
}

/// Returns the simple status occupying the given board lane, if any.
///
/// Simple statuses map one-to-one onto their lanes, so a lane-targeted move
/// resolves to at most one concrete status.
#[must_use]
pub fn status_in_lane(lane: ColumnKind) -> Option<Status> {
    STATUSES.iter().copied().find(|status| status.column() == lane)
}

/// Builds the shared simple board: one lane per catalog status, no moves.
///
/// The adjacency relation is queried directly rather than materialized as
/// working moves, so simple lanes carry empty move lists.
#[must_use]
pub fn board() -> Vec<BoardColumn> {
    let lanes: Vec<ColumnKind> = STATUSES.iter().map(|status| status.column()).collect();
    build_board(&lanes, &[])
}
