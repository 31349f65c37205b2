//! Test helpers shared across crates.
//!
//! Provides sample failure causes, identity assertions over cause lists,
//! Gherkin placeholder normalisation, and a `figment::Jail` runner.

pub mod failures;
pub mod figment;
pub mod text;
