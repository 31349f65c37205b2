//! Sample failure causes and assertions over cause lists.
//!
//! The causes built here are deliberately *not* `build_outcome::BuildError`
//! values, so a lone one is always wrapped when a result is collapsed.
//!
//! # Examples
//!
//! ```
//! use test_helpers::failures;
//!
//! let first = failures::checked("E1");
//! let second = failures::checked("E2");
//! assert_eq!(failures::labels(&[first, second]), ["E1", "E2"]);
//! ```

use std::{error::Error, sync::Arc};

use anyhow::{Result, ensure};
use thiserror::Error;

/// Shared handle matching `build_outcome::Cause`.
pub type SharedCause = Arc<dyn Error + Send + Sync + 'static>;

/// A failure that is not one of the crate's own error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label}")]
pub struct CheckedFailure {
    /// Text used as the error message.
    pub label: String,
}

/// Builds a [`CheckedFailure`] cause displaying `label`.
#[must_use]
pub fn checked(label: &str) -> SharedCause {
    Arc::new(CheckedFailure {
        label: label.to_owned(),
    })
}

/// Builds `count` checked causes labelled `{prefix}1`, `{prefix}2`, ...
#[must_use]
pub fn checked_series(prefix: &str, count: usize) -> Vec<SharedCause> {
    (1..=count)
        .map(|n| checked(&format!("{prefix}{n}")))
        .collect()
}

/// Renders each cause with `Display`, keeping order.
#[must_use]
pub fn labels(causes: &[SharedCause]) -> Vec<String> {
    causes.iter().map(ToString::to_string).collect()
}

/// Asserts that `actual` holds exactly the handles in `expected`, in order.
///
/// Handles are compared by identity, not by message.
///
/// # Errors
///
/// Returns an error describing the first mismatch.
pub fn assert_same_causes(actual: &[SharedCause], expected: &[SharedCause]) -> Result<()> {
    ensure!(
        actual.len() == expected.len(),
        "expected {} causes, found {}: {:?}",
        expected.len(),
        actual.len(),
        labels(actual)
    );
    for (position, (found, wanted)) in actual.iter().zip(expected).enumerate() {
        ensure!(
            Arc::ptr_eq(found, wanted),
            "cause {position} is '{found}', expected the handle for '{wanted}'"
        );
    }
    Ok(())
}
