//! Primary error enum for build execution flows.

use std::sync::Arc;

use figment::Error as FigmentError;
use thiserror::Error;

use super::aggregate::MultipleFailures;

/// Shared, immutable handle to a failure cause.
///
/// Any error type can be a cause. Handles are reference counted so results
/// can be merged and collapsed without copying the errors they carry, and
/// so callers can check identity with [`Arc::ptr_eq`].
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while executing build work.
///
/// When the only cause of a failed result is a `BuildError`, collapsing the
/// result returns that very cause instead of wrapping it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A requested service could not be located.
    #[error("{message}")]
    ServiceLookup {
        /// Description of the lookup that failed.
        message: String,
        /// Failure that prevented the lookup, when known.
        #[source]
        source: Option<Cause>,
    },

    /// A unit of work panicked instead of reporting a result.
    #[error("task '{task}' panicked: {message}")]
    TaskPanicked {
        /// Label of the task that panicked.
        task: String,
        /// Panic payload rendered as text.
        message: String,
    },

    /// Work was submitted after the executor stopped accepting it.
    #[error("executor '{executor}' has been shut down and rejected new work")]
    Rejected {
        /// Name of the executor that refused the work.
        executor: String,
    },

    /// Work was accepted but dropped before it reported a result.
    #[error("task '{task}' was abandoned before reporting a result")]
    Abandoned {
        /// Label of the task that never reported.
        task: String,
    },

    /// A worker thread could not be started.
    #[error("failed to spawn worker thread '{thread}': {source}")]
    WorkerSpawn {
        /// Name requested for the thread.
        thread: String,
        /// Error reported by the operating system.
        #[source]
        source: std::io::Error,
    },

    /// Error while gathering executor configuration from providers.
    #[error("Failed to gather executor configuration: {0}")]
    Config(#[from] Box<FigmentError>),

    /// Validation failures when building executor configuration.
    #[error("Validation failed for '{key}': {message}")]
    Validation {
        /// Configuration key that failed validation.
        key: String,
        /// Human-readable explanation of the validation failure.
        message: String,
    },

    /// Several failures collapsed into a single error.
    #[error("multiple build failures:\n{0}")]
    Multiple(MultipleFailures),
}
