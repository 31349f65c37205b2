//! Accessor calls that do not apply to a result's variant.

use thiserror::Error;

/// Contract violation raised by an accessor used on the wrong variant.
///
/// These indicate a programming defect in the caller. The panicking
/// accessors on [`ExecutionResult`](crate::ExecutionResult) panic with this
/// message; their `try_` counterparts return it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidState {
    /// `value` was requested from a failed result.
    #[error("cannot get the value of a failed result")]
    ValueOfFailure,

    /// `failure` was requested from a successful result.
    #[error("cannot get the failure of a successful result")]
    FailureOfSuccess,

    /// A successful result was cast to a failed one.
    #[error("cannot cast a successful result to a failed result")]
    CastSuccessToFailure,
}
