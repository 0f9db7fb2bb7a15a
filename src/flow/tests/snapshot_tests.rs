//! Tests for transport snapshots.

use rstest::rstest;

use crate::flow::domain::{Role, WorkflowKind};
use crate::flow::{FlowSnapshot, TaskFlow};

#[rstest]
fn advanced_snapshot_carries_one_board_per_role() {
    let flow = TaskFlow::new(WorkflowKind::Advanced, [Role::Architect, Role::Developer])
        .expect("advanced workflow compiles");
    let snapshot = flow.snapshot();

    assert_eq!(
        snapshot.user_roles,
        vec![Some(Role::Architect), Some(Role::Developer)]
    );
    assert_eq!(
        snapshot.columns_for(Role::Architect).map(<[_]>::len),
        Some(6)
    );
    assert_eq!(
        snapshot.columns_for(Role::Developer).map(<[_]>::len),
        Some(6)
    );
    assert_eq!(snapshot.columns_for(Role::Tester), None);
}

#[rstest]
fn simple_snapshot_carries_a_single_role_less_board() {
    let flow =
        TaskFlow::new(WorkflowKind::Simple, []).expect("simple workflow compiles");
    let snapshot = flow.snapshot();

    assert_eq!(snapshot.user_roles, vec![None]);
    let board = snapshot.boards.first().expect("board present");
    assert_eq!(board.role, None);
    assert_eq!(board.columns.len(), 4);
}

#[rstest]
fn snapshot_round_trips_through_json() {
    let flow = TaskFlow::new(WorkflowKind::Advanced, [Role::Tester])
        .expect("advanced workflow compiles");
    let snapshot = flow.snapshot();

    let payload = serde_json::to_string(&snapshot).expect("snapshot serialises");
    assert!(payload.contains("\"tester\""));
    assert!(payload.contains("\"back_log\""));

    let restored: FlowSnapshot = serde_json::from_str(&payload).expect("snapshot parses");
    assert_eq!(restored, snapshot);
}
