//! Shared fixtures for the fan-in behaviour scenarios.

use build_outcome::{Cause, ExecutionResult};
use build_outcome::executor::Operation;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// One sibling operation declared by a scenario.
#[derive(Debug, Clone)]
pub enum Sibling {
    /// Produces a value, which fan-in discards.
    Succeeds(String),
    /// Reports the given cause.
    Fails(Cause),
}

impl Sibling {
    /// Runs the sibling on the current thread.
    pub fn run(self) -> ExecutionResult<()> {
        match self {
            Self::Succeeds(value) => ExecutionResult::succeeded(value).discard_value(),
            Self::Fails(cause) => ExecutionResult::failed_with(cause),
        }
    }

    /// Packages the sibling for submission to an executor.
    pub fn into_operation(self) -> Operation {
        Box::new(move || self.run())
    }
}

/// Scenario state shared between fan-in steps.
#[derive(Debug, Default, ScenarioState)]
pub struct FanInContext {
    pub siblings: Slot<Vec<Sibling>>,
    pub merged: Slot<ExecutionResult<()>>,
    pub lookup: Slot<Cause>,
}

impl FanInContext {
    /// Appends a sibling to the declared list.
    pub fn push_sibling(&self, sibling: Sibling) {
        let mut siblings = self.siblings.take().unwrap_or_default();
        siblings.push(sibling);
        self.siblings.set(siblings);
    }
}

/// Creates a clean fan-in context for each scenario.
#[fixture]
pub fn fan_in_context() -> FanInContext {
    FanInContext::default()
}
