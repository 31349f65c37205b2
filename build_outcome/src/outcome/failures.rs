//! Ordered, non-empty list of failure causes.

use std::{fmt, ops::Deref, sync::Arc};

use crate::{BuildError, Cause, MultipleFailures};

/// Causes recorded by a failed [`ExecutionResult`](crate::ExecutionResult).
///
/// The list is never empty and keeps insertion order: the first entry is the
/// first failure encountered. It is immutable once built, so clones share
/// storage and merging always allocates a fresh list.
#[derive(Clone)]
pub struct Failures(Arc<[Cause]>);

impl Failures {
    pub(crate) fn single(cause: Cause) -> Self {
        Self(Arc::new([cause]))
    }

    /// Copies `causes` into a new list, or returns `None` when it is empty.
    pub(crate) fn copy_of(causes: &[Cause]) -> Option<Self> {
        if causes.is_empty() {
            None
        } else {
            Some(Self(causes.iter().map(Arc::clone).collect()))
        }
    }

    /// Returns `self` followed by `other` as a new list.
    pub(crate) fn concat(&self, other: &Self) -> Self {
        Self(self.iter().chain(other.iter()).map(Arc::clone).collect())
    }

    /// Collapses the list into a single reportable cause.
    ///
    /// A lone [`BuildError`] is returned as the same handle. Anything else is
    /// wrapped in [`BuildError::Multiple`].
    pub(crate) fn collapse(&self) -> Cause {
        match self.as_slice() {
            [only] if only.is::<BuildError>() => Arc::clone(only),
            causes => {
                tracing::debug!(count = causes.len(), "collapsing failures into a composite");
                Arc::new(BuildError::Multiple(MultipleFailures::new(self.clone())))
            }
        }
    }

    /// Causes in the order they were recorded.
    #[must_use]
    pub fn as_slice(&self) -> &[Cause] {
        &self.0
    }
}

impl Deref for Failures {
    type Target = [Cause];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl fmt::Debug for Failures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Failures {
    type Item = &'a Cause;
    type IntoIter = std::slice::Iter<'a, Cause>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
