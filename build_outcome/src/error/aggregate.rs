//! Composite error carrying every cause of a failed result.

use std::{error::Error, fmt};

use super::Cause;
use crate::outcome::Failures;

/// Ordered, non-empty collection of causes collapsed into one error.
///
/// The causes remain available as structured data, so reporting code can
/// walk them individually after the collapse.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use build_outcome::{BuildError, Cause, ExecutionResult};
///
/// let first: Cause = Arc::new(BuildError::service_lookup("no compiler"));
/// let second: Cause = Arc::new(BuildError::service_lookup("no linker"));
/// let result = ExecutionResult::<()>::maybe_failed(&[first, second]);
/// let failure = result.failure();
/// match failure.downcast_ref::<BuildError>() {
///     Some(BuildError::Multiple(all)) => assert_eq!(all.len(), 2),
///     other => panic!("expected a composite, got {other:?}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MultipleFailures(Failures);

impl MultipleFailures {
    pub(crate) const fn new(failures: Failures) -> Self {
        Self(failures)
    }

    /// Causes in the order they were recorded.
    #[must_use]
    pub fn causes(&self) -> &[Cause] {
        self.0.as_slice()
    }

    /// Iterate over the contained causes.
    #[must_use = "iterators should be consumed to inspect causes"]
    pub fn iter(&self) -> std::slice::Iter<'_, Cause> {
        self.causes().iter()
    }

    /// Number of collapsed causes. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.causes().len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the underlying non-empty failure list.
    #[must_use]
    pub fn into_failures(self) -> Failures {
        self.0
    }
}

impl fmt::Display for MultipleFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cause) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {cause}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for MultipleFailures {}

impl<'a> IntoIterator for &'a MultipleFailures {
    type Item = &'a Cause;
    type IntoIter = std::slice::Iter<'a, Cause>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
