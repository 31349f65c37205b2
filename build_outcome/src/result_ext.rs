//! Extensions for turning `Result` values into execution results.
//!
//! Operations usually report through `Result<T, E>`. These helpers lift
//! such values into [`ExecutionResult`] so they can be merged with sibling
//! outcomes.
//!
//! # Examples
//!
//! ```
//! use build_outcome::{ExecutionResult, ResultExt};
//!
//! let parsed = "8".parse::<u8>().into_execution_result();
//! assert_eq!(*parsed.value(), 8);
//!
//! let rejected = "x".parse::<u8>().into_execution_result();
//! assert_eq!(rejected.failures().len(), 1);
//! ```

use std::error::Error;

use crate::{Cause, ExecutionResult};

/// Conversion from `Result<T, E>` into [`ExecutionResult<T>`].
pub trait ResultExt<T> {
    /// Wraps `Ok` as a success and `Err` as a single-cause failure.
    fn into_execution_result(self) -> ExecutionResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn into_execution_result(self) -> ExecutionResult<T> {
        match self {
            Ok(value) => ExecutionResult::succeeded(value),
            Err(err) => ExecutionResult::failed(err),
        }
    }
}

impl<T> From<Result<T, Cause>> for ExecutionResult<T> {
    /// Keeps a shared cause as-is, without nesting it in a new handle.
    fn from(result: Result<T, Cause>) -> Self {
        match result {
            Ok(value) => Self::succeeded(value),
            Err(cause) => Self::failed_with(cause),
        }
    }
}
