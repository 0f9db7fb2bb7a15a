//! When steps for task move BDD scenarios.

use rstest_bdd_macros::when;
use taskboard::flow::domain::{ColumnKind, Status};

use super::world::TaskMoveWorld;

#[when(r#"the task is moved from "{from}" to "{to}""#)]
fn move_to_status(
    world: &mut TaskMoveWorld,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    let origin = Status::try_from(from.as_str())?;
    let target = Status::try_from(to.as_str())?;
    let resolution = world.flow()?.resolve_move(origin, target);
    world.last_resolution = Some(resolution);
    Ok(())
}

#[when(r#"the task is dragged from "{from}" onto the "{lane}" lane"#)]
fn move_to_lane(
    world: &mut TaskMoveWorld,
    from: String,
    lane: String,
) -> Result<(), eyre::Report> {
    let origin = Status::try_from(from.as_str())?;
    let target = ColumnKind::try_from(lane.as_str())?;
    let resolution = world.flow()?.resolve_move(origin, target);
    world.last_resolution = Some(resolution);
    Ok(())
}
