//! `rstest-bdd` behaviour suite for fan-in of execution results.
//!
//! [`steps`] registers the step implementations, [`fixtures`] holds the
//! shared scenario state, and [`scenarios`] binds the `.feature` files.

mod fixtures;
mod scenarios;
mod steps;
