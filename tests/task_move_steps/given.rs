//! Given steps for task move BDD scenarios.

use rstest_bdd_macros::given;
use taskboard::flow::TaskFlow;
use taskboard::flow::domain::{Role, WorkflowKind};

use super::world::TaskMoveWorld;

#[given("a simple workflow with no roles")]
fn simple_workflow(world: &mut TaskMoveWorld) -> Result<(), eyre::Report> {
    world.flow = Some(TaskFlow::new(WorkflowKind::Simple, [])?);
    Ok(())
}

#[given(r#"an advanced workflow for role "{role}""#)]
fn advanced_workflow(world: &mut TaskMoveWorld, role: String) -> Result<(), eyre::Report> {
    let parsed = Role::try_from(role.as_str())?;
    world.flow = Some(TaskFlow::new(WorkflowKind::Advanced, [parsed])?);
    Ok(())
}
