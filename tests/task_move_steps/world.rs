//! Shared world state for task move BDD scenarios.

use rstest::fixture;
use taskboard::flow::TaskFlow;
use taskboard::flow::domain::Status;

/// Scenario world for task move behaviour tests.
#[derive(Default)]
pub struct TaskMoveWorld {
    /// Flow compiled by the scenario's given step.
    pub flow: Option<TaskFlow>,
    /// Outcome of the most recent move query.
    pub last_resolution: Option<Option<Status>>,
}

impl TaskMoveWorld {
    /// Returns the compiled flow or fails the step.
    pub fn flow(&self) -> Result<&TaskFlow, eyre::Report> {
        self.flow
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing compiled flow in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskMoveWorld {
    TaskMoveWorld::default()
}
