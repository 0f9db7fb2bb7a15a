//! Then steps for task move BDD scenarios.

use rstest_bdd_macros::then;
use taskboard::flow::domain::{ColumnKind, Status};

use super::world::TaskMoveWorld;

#[then(r#"the move resolves to "{status}""#)]
fn move_resolves_to(world: &TaskMoveWorld, status: String) -> Result<(), eyre::Report> {
    let expected = Status::try_from(status.as_str())?;
    let resolution = world
        .last_resolution
        .ok_or_else(|| eyre::eyre!("missing move resolution in scenario world"))?;

    match resolution {
        Some(resolved) if resolved == expected => Ok(()),
        other => Err(eyre::eyre!("expected {expected}, got {other:?}")),
    }
}

#[then("the move is rejected")]
fn move_is_rejected(world: &TaskMoveWorld) -> Result<(), eyre::Report> {
    let resolution = world
        .last_resolution
        .ok_or_else(|| eyre::eyre!("missing move resolution in scenario world"))?;

    if let Some(resolved) = resolution {
        return Err(eyre::eyre!("expected a rejected move, got {resolved}"));
    }
    Ok(())
}

#[then(r#"the first board lane is "{lane}" with no moves"#)]
fn first_lane_is_empty(world: &TaskMoveWorld, lane: String) -> Result<(), eyre::Report> {
    let expected = ColumnKind::try_from(lane.as_str())?;
    let columns = world.flow()?.columns();
    let first = columns
        .first()
        .ok_or_else(|| eyre::eyre!("board has no lanes"))?;

    if first.column != expected {
        return Err(eyre::eyre!(
            "expected first lane {expected}, found {}",
            first.column
        ));
    }
    if !first.moves.is_empty() {
        return Err(eyre::eyre!(
            "expected an empty lane, found {} moves",
            first.moves.len()
        ));
    }
    Ok(())
}
