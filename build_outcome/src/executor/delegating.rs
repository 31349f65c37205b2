//! Executor wrapper that forwards every call to another executor.

use std::time::Duration;

use super::{Executor, Job};
use crate::BuildError;

/// Forwards every [`Executor`] call to a wrapped executor.
///
/// Serves as the base for decorators that add behaviour around an existing
/// executor without changing how it runs work. Submissions are traced under
/// the wrapper's name.
#[derive(Debug)]
pub struct DelegatingExecutor<E> {
    name: String,
    delegate: E,
}

impl<E: Executor> DelegatingExecutor<E> {
    /// Wraps `delegate` under `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, delegate: E) -> Self {
        Self {
            name: name.into(),
            delegate,
        }
    }

    /// Name used when tracing submissions.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped executor.
    #[must_use]
    pub const fn delegate(&self) -> &E {
        &self.delegate
    }

    /// Unwraps the delegate.
    #[must_use]
    pub fn into_inner(self) -> E {
        self.delegate
    }
}

impl<E: Executor> Executor for DelegatingExecutor<E> {
    fn execute(&self, job: Job) -> Result<(), BuildError> {
        tracing::trace!(executor = %self.name, "delegating job");
        self.delegate.execute(job)
    }

    fn shutdown(&self) {
        self.delegate.shutdown();
    }

    fn shutdown_now(&self) -> Vec<Job> {
        self.delegate.shutdown_now()
    }

    fn is_shutdown(&self) -> bool {
        self.delegate.is_shutdown()
    }

    fn is_terminated(&self) -> bool {
        self.delegate.is_terminated()
    }

    fn await_termination(&self, timeout: Duration) -> bool {
        self.delegate.await_termination(timeout)
    }
}
