//! Binds the fan-in feature file to the step registry.

use crate::fixtures::{FanInContext, fan_in_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/fan_in.feature",
    fixtures = [fan_in_context: FanInContext]
);
