//! Query facade over a compiled workflow instance.
//!
//! [`TaskFlow`] is constructed once per request from the project's workflow
//! kind and the viewer's roles. Construction eagerly resolves role aliases,
//! merges the per-role move tables into one working set, and builds the
//! board layout per role; every method afterwards is a pure read over that
//! immutable state, so instances need no locking and can be rebuilt or
//! cached freely.

use serde::{Deserialize, Serialize};

use super::domain::{
    BoardColumn, ColumnKind, FlowError, Role, RoleBoard, RoleMove, Status, WorkflowKind, advanced,
    simple,
};

/// Target of a move query: an exact status, or a board lane to be resolved
/// to the concrete status the permitted move delivers into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Exact arrival status.
    Status(Status),
    /// Board lane; resolution picks the move landing in it.
    Column(ColumnKind),
}

impl From<Status> for MoveTarget {
    fn from(status: Status) -> Self {
        Self::Status(status)
    }
}

impl From<ColumnKind> for MoveTarget {
    fn from(lane: ColumnKind) -> Self {
        Self::Column(lane)
    }
}

/// Transport snapshot of a compiled workflow instance: the resolved viewer
/// roles and one board layout per role, ready for a client response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    /// Resolved viewer roles; `[None]` for the simple workflow.
    pub user_roles: Vec<Option<Role>>,
    /// Board layout per viewer role.
    pub boards: Vec<RoleBoard>,
}

impl FlowSnapshot {
    /// Returns the board columns compiled for the given role, if the role
    /// was resolved for this instance.
    #[must_use]
    pub fn columns_for(&self, role: Role) -> Option<&[BoardColumn]> {
        self.boards
            .iter()
            .find(|board| board.role == Some(role))
            .map(|board| board.columns.as_slice())
    }
}

/// A compiled workflow instance answering board and transition queries.
///
/// # Examples
///
/// ```
/// use taskboard::flow::TaskFlow;
/// use taskboard::flow::domain::{Role, Status, WorkflowKind};
///
/// let flow = TaskFlow::new(WorkflowKind::Advanced, [Role::Architect])?;
/// let target = flow.resolve_move(Status::Creating, Status::EstimationBeforeAssigning);
/// assert_eq!(target, Some(Status::EstimationBeforeAssigning));
/// # Ok::<(), taskboard::flow::domain::FlowError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFlow {
    kind: WorkflowKind,
    viewer_roles: Vec<Option<Role>>,
    moves: Vec<RoleMove>,
    boards: Vec<RoleBoard>,
}

impl TaskFlow {
    /// Compiles a workflow instance for the given kind and viewer roles.
    ///
    /// Simple workflows accept roles but ignore them; advanced workflows
    /// canonicalize and deduplicate them first. The merged working set and
    /// per-role boards are built here, so every later query is a read.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::UnsupportedWorkflow`] when the kind is not one
    /// of the two implemented workflows.
    pub fn new(
        kind: WorkflowKind,
        roles: impl IntoIterator<Item = Role>,
    ) -> Result<Self, FlowError> {
        match kind {
            WorkflowKind::Simple => Ok(Self {
                kind,
                viewer_roles: vec![None],
                moves: Vec::new(),
                boards: vec![RoleBoard {
                    role: None,
                    columns: simple::board(),
                }],
            }),
            WorkflowKind::Advanced => {
                let resolved = Role::resolve(roles);
                let moves = advanced::merged_moves(&resolved);
                let boards = resolved
                    .iter()
                    .map(|&role| RoleBoard {
                        role: Some(role),
                        columns: advanced::board_for(role),
                    })
                    .collect();
                Ok(Self {
                    kind,
                    viewer_roles: resolved.into_iter().map(Some).collect(),
                    moves,
                    boards,
                })
            }
            WorkflowKind::DoubleCheck => Err(FlowError::UnsupportedWorkflow(kind)),
        }
    }

    /// Returns the workflow kind this instance was compiled for.
    #[must_use]
    pub const fn kind(&self) -> WorkflowKind {
        self.kind
    }

    /// Returns the resolved viewer roles.
    ///
    /// The simple workflow always reports a single role-less viewer; the
    /// advanced workflow reports the canonical, deduplicated request order.
    #[must_use]
    pub fn viewer_roles(&self) -> &[Option<Role>] {
        &self.viewer_roles
    }

    /// Returns the number of discrete steps in scope: the status count for
    /// the simple workflow, the merged working-set size for the advanced.
    #[must_use]
    pub fn steps(&self) -> usize {
        if self.kind == WorkflowKind::Simple {
            simple::STATUSES.len()
        } else {
            self.moves.len()
        }
    }

    /// Returns the merged working move set, flattened in role order.
    #[must_use]
    pub fn moves(&self) -> &[RoleMove] {
        &self.moves
    }

    /// Returns the board columns of the primary (first-resolved) viewer
    /// role; empty when an advanced instance was built with no roles.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        self.boards
            .first()
            .map_or(&[], |board| board.columns.as_slice())
    }

    /// Returns every status of the current catalog.
    ///
    /// The advanced workflow reports the full thirteen-status catalog
    /// regardless of which roles were requested; status filters must offer
    /// every stage a viewer could encounter, not only the ones they can
    /// move.
    #[must_use]
    pub fn available_statuses(&self) -> &'static [Status] {
        if self.kind == WorkflowKind::Simple {
            &simple::STATUSES
        } else {
            &advanced::STATUSES
        }
    }

    /// Computes the status a newly created task receives.
    ///
    /// Simple workflow: the requested status passes through when it belongs
    /// to the simple catalog, defaulting to [`Status::ReadyToDo`] when
    /// omitted. Advanced workflow: always the primary role's configured
    /// creation status; the argument is accepted for interface symmetry but
    /// has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidStatus`] when a simple-workflow request
    /// names a status outside the simple catalog, and
    /// [`FlowError::RoleRequired`] when an advanced instance was built with
    /// no resolved roles.
    pub fn created_status(&self, requested: Option<Status>) -> Result<Status, FlowError> {
        if self.kind == WorkflowKind::Simple {
            return match requested {
                None => Ok(simple::CREATED_STATUS),
                Some(status) if simple::contains(status) => Ok(status),
                Some(status) => Err(FlowError::InvalidStatus(status)),
            };
        }

        self.viewer_roles
            .iter()
            .flatten()
            .next()
            .map(|&role| advanced::flow_for(role).created_status)
            .ok_or(FlowError::RoleRequired)
    }

    /// Returns `true` when active work may begin on a task in the given
    /// status: the status belongs to the current catalog and is not
    /// terminal.
    #[must_use]
    pub fn can_be_started(&self, status: Status) -> bool {
        self.available_statuses().contains(&status) && !status.is_terminal()
    }

    /// Resolves a requested move to the concrete status it delivers into.
    ///
    /// Returns `Some(status)` when the move is permitted, where the value
    /// is the new status to persist, and `None` when it is not. A
    /// disallowed move is a normal query outcome, never an error.
    ///
    /// Simple workflow: a lane target resolves to the simple status
    /// occupying the lane, then the fixed adjacency relation decides.
    /// Advanced workflow: the merged working set is scanned in order for a
    /// move departing `from` and arriving at the target status or lane.
    #[must_use]
    pub fn resolve_move(&self, from: Status, target: impl Into<MoveTarget>) -> Option<Status> {
        let requested = target.into();
        if self.kind == WorkflowKind::Simple {
            return resolve_simple(from, requested);
        }

        self.moves.iter().find_map(|m| {
            if m.from != from {
                return None;
            }
            let matched = match requested {
                MoveTarget::Status(status) => m.to == status,
                MoveTarget::Column(lane) => m.to.column() == lane,
            };
            matched.then_some(m.to)
        })
    }

    /// Clones the compiled state into a transport snapshot for a client
    /// response.
    #[must_use]
    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            user_roles: self.viewer_roles.clone(),
            boards: self.boards.clone(),
        }
    }
}

fn resolve_simple(from: Status, target: MoveTarget) -> Option<Status> {
    let to = match target {
        MoveTarget::Status(status) => status,
        MoveTarget::Column(lane) => simple::status_in_lane(lane)?,
    };
    simple::is_permitted(from, to).then_some(to)
}
