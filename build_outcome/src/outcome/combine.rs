//! Merging and re-typing of execution results.

use super::ExecutionResult;
use crate::InvalidState;

impl<T> ExecutionResult<T> {
    /// Returns this result with the failures of `other` appended.
    ///
    /// If `other` succeeded, `self` is returned unchanged, failures included.
    /// Otherwise the new result lists this result's causes (none, for a
    /// success) followed by those of `other`. A successful receiver therefore
    /// becomes a failure carrying only `other`'s causes; it had none of its
    /// own to keep.
    ///
    /// Folding siblings one after another concatenates their causes in fold
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use build_outcome::{BuildError, ExecutionResult};
    ///
    /// let merged = ExecutionResult::succeeded("artifact")
    ///     .with_failures(ExecutionResult::SUCCESS)
    ///     .with_failures(ExecutionResult::failed(BuildError::service_lookup("a")))
    ///     .with_failures(ExecutionResult::failed(BuildError::service_lookup("b")));
    /// let messages: Vec<_> = merged.failures().iter().map(ToString::to_string).collect();
    /// assert_eq!(messages, ["a", "b"]);
    /// ```
    pub fn with_failures(self, other: ExecutionResult<()>) -> Self {
        match (self, other) {
            (receiver, ExecutionResult::Success(())) => receiver,
            (Self::Success(_), ExecutionResult::Failure(theirs)) => Self::Failure(theirs),
            (Self::Failure(ours), ExecutionResult::Failure(theirs)) => {
                Self::Failure(ours.concat(&theirs))
            }
        }
    }

    /// Views a failed result as a result of another value type.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState::CastSuccessToFailure`] for a successful result.
    pub fn try_as_failure<S>(self) -> Result<ExecutionResult<S>, InvalidState> {
        match self {
            Self::Success(_) => Err(InvalidState::CastSuccessToFailure),
            Self::Failure(failures) => Ok(ExecutionResult::Failure(failures)),
        }
    }

    /// Views a failed result as a result of another value type.
    ///
    /// The causes are moved, not copied.
    ///
    /// # Panics
    ///
    /// Panics if the result is a success; callers are expected to have
    /// checked [`Self::is_failure`] first.
    #[track_caller]
    pub fn as_failure<S>(self) -> ExecutionResult<S> {
        match self.try_as_failure() {
            Ok(failed) => failed,
            Err(err) => panic!("{err}"),
        }
    }
}
