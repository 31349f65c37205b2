//! Constructors for `BuildError`.

use figment::Error as FigmentError;

use super::{BuildError, Cause};

impl BuildError {
    /// Construct a lookup failure with no underlying cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use build_outcome::BuildError;
    /// let e = BuildError::service_lookup("no service of type Compiler");
    /// assert_eq!(e.to_string(), "no service of type Compiler");
    /// ```
    #[must_use]
    pub fn service_lookup(message: impl Into<String>) -> Self {
        Self::ServiceLookup {
            message: message.into(),
            source: None,
        }
    }

    /// Construct a lookup failure caused by another error.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::{error::Error as _, io, sync::Arc};
    /// use build_outcome::BuildError;
    /// let cause = Arc::new(io::Error::other("registry closed"));
    /// let e = BuildError::service_lookup_caused_by("no service of type Linker", cause);
    /// assert!(e.source().is_some());
    /// ```
    #[must_use]
    pub fn service_lookup_caused_by(message: impl Into<String>, source: Cause) -> Self {
        Self::ServiceLookup {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Construct a configuration error from a [`figment::Error`].
    #[must_use]
    pub fn config(source: FigmentError) -> Self {
        Self::Config(Box::new(source))
    }

    /// Construct a validation error for `key`.
    #[must_use]
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }

    pub(crate) fn rejected(executor: &str) -> Self {
        Self::Rejected {
            executor: executor.to_owned(),
        }
    }

    pub(crate) fn abandoned(task: impl Into<String>) -> Self {
        Self::Abandoned { task: task.into() }
    }

    pub(crate) fn task_panicked(task: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TaskPanicked {
            task: task.into(),
            message: message.into(),
        }
    }
}
