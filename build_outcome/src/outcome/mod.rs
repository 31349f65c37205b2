//! The aggregated execution result.
//!
//! An [`ExecutionResult`] holds either the value an operation produced or
//! every failure it (and any sibling operations merged into it) reported.
//! Results are immutable: combining two results always builds a new one.

mod combine;
mod failures;

use std::{error::Error, sync::Arc};

pub use failures::Failures;

use crate::{Cause, InvalidState};

/// Outcome of an operation: one value, or one or more failures.
///
/// # Examples
///
/// ```
/// use build_outcome::{BuildError, ExecutionResult};
///
/// let ok = ExecutionResult::succeeded(42);
/// assert_eq!(*ok.value(), 42);
/// assert!(ok.failures().is_empty());
///
/// let failed: ExecutionResult<u32> =
///     ExecutionResult::failed(BuildError::service_lookup("no compiler"));
/// assert_eq!(failed.failures().len(), 1);
/// assert!(failed.value_or_rethrow().is_err());
/// ```
#[derive(Debug, Clone)]
#[must_use = "an execution result may carry failures that must be reported"]
pub enum ExecutionResult<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed; causes are kept in the order they occurred.
    Failure(Failures),
}

impl ExecutionResult<()> {
    /// Shared successful result for operations that return nothing.
    pub const SUCCESS: Self = Self::Success(());

    /// Returns [`Self::SUCCESS`].
    pub const fn success() -> Self {
        Self::SUCCESS
    }

    /// Builds a result from a list of causes that may be empty.
    ///
    /// An empty slice yields [`Self::SUCCESS`]. Otherwise the handles are
    /// copied into a list owned by the result, so later changes to the
    /// caller's collection are not observed.
    pub fn maybe_failed(causes: &[Cause]) -> Self {
        Failures::copy_of(causes).map_or(Self::SUCCESS, Self::Failure)
    }

    /// Builds a result from an optional single cause.
    pub fn maybe_failed_single(cause: Option<Cause>) -> Self {
        cause.map_or(Self::SUCCESS, Self::failed_with)
    }
}

impl<T> ExecutionResult<T> {
    /// Wraps a produced value.
    pub const fn succeeded(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a single owned error as the only cause.
    ///
    /// A [`Cause`] passed here is kept as the same handle rather than nested
    /// inside a new one.
    pub fn failed<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let wrapped: Cause = Arc::new(error);
        let cause = wrapped
            .downcast_ref::<Cause>()
            .map_or_else(|| Arc::clone(&wrapped), Arc::clone);
        Self::failed_with(cause)
    }

    /// Wraps a shared cause without re-allocating it.
    pub fn failed_with(cause: Cause) -> Self {
        Self::Failure(Failures::single(cause))
    }

    /// Returns `true` if the operation produced a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the operation recorded at least one failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState::ValueOfFailure`] for a failed result.
    pub const fn try_value(&self) -> Result<&T, InvalidState> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(InvalidState::ValueOfFailure),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics if the result is a failure. Check [`Self::is_success`] or use
    /// [`Self::try_value`] when that is possible.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Consumes the result and returns the value.
    ///
    /// # Panics
    ///
    /// Panics if the result is a failure.
    #[must_use]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", InvalidState::ValueOfFailure),
        }
    }

    /// Returns the recorded causes, or an empty slice on success.
    #[must_use]
    pub fn failures(&self) -> &[Cause] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(failures) => failures.as_slice(),
        }
    }

    /// Collapses the failures into one reportable cause.
    ///
    /// A single [`BuildError`](crate::BuildError) cause is returned as the
    /// same handle. Several causes, or a single cause of any other type, are
    /// wrapped in [`BuildError::Multiple`](crate::BuildError::Multiple).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState::FailureOfSuccess`] for a successful result.
    pub fn try_failure(&self) -> Result<Cause, InvalidState> {
        match self {
            Self::Success(_) => Err(InvalidState::FailureOfSuccess),
            Self::Failure(failures) => Ok(failures.collapse()),
        }
    }

    /// Collapses the failures into one reportable cause.
    ///
    /// See [`Self::try_failure`] for the collapse rules.
    ///
    /// # Panics
    ///
    /// Panics if the result is a success.
    #[must_use]
    #[track_caller]
    pub fn failure(&self) -> Cause {
        match self.try_failure() {
            Ok(cause) => cause,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the value, or the collapsed failure as an error.
    ///
    /// # Errors
    ///
    /// Returns the cause produced by [`Self::failure`] when the result failed.
    pub fn value_or_rethrow(self) -> Result<T, Cause> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failures) => Err(failures.collapse()),
        }
    }

    /// Surfaces the failures, if any, for propagation with `?`.
    ///
    /// Does nothing for a successful result. May be called repeatedly; each
    /// call collapses the same causes.
    ///
    /// # Errors
    ///
    /// Returns the cause produced by [`Self::failure`] when the result failed.
    pub fn rethrow(&self) -> Result<(), Cause> {
        match self {
            Self::Success(_) => Ok(()),
            Self::Failure(failures) => Err(failures.collapse()),
        }
    }

    /// Maps the value of a successful result, keeping failures as they are.
    pub fn map<U, F>(self, f: F) -> ExecutionResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => ExecutionResult::Success(f(value)),
            Self::Failure(failures) => ExecutionResult::Failure(failures),
        }
    }

    /// Drops the value so the result can be merged with unit results.
    pub fn discard_value(self) -> ExecutionResult<()> {
        self.map(drop)
    }
}

impl FromIterator<ExecutionResult<()>> for ExecutionResult<()> {
    /// Folds sibling results with [`ExecutionResult::with_failures`] in
    /// iteration order.
    fn from_iter<I: IntoIterator<Item = ExecutionResult<()>>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::SUCCESS, ExecutionResult::with_failures)
    }
}
