//! Aggregated execution results for build orchestration.
//!
//! An operation, or a fan-out of sibling operations, reports through an
//! [`ExecutionResult`]: either the value it produced or every failure it
//! encountered, in order. Failures from siblings are merged with
//! [`ExecutionResult::with_failures`] and collapsed into one reportable error
//! with [`ExecutionResult::failure`].
//!
//! The [`executor`] module provides the worker pool and fan-out helper used
//! to run sibling operations concurrently.
//!
//! ```
//! use build_outcome::{BuildError, ExecutionResult};
//!
//! let siblings = [
//!     ExecutionResult::SUCCESS,
//!     ExecutionResult::failed(BuildError::service_lookup("no compiler")),
//!     ExecutionResult::failed(BuildError::service_lookup("no linker")),
//! ];
//! let merged: ExecutionResult<()> = siblings.into_iter().collect();
//! assert_eq!(merged.failures().len(), 2);
//! assert!(merged.rethrow().is_err());
//! ```

mod error;
pub mod executor;
mod outcome;
mod result_ext;

pub use error::{BuildError, Cause, InvalidState, MultipleFailures};
pub use outcome::{ExecutionResult, Failures};
pub use result_ext::ResultExt;
