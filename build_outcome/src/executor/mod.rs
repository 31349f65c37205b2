//! Running units of work, possibly concurrently.
//!
//! [`Executor`] is the seam between orchestration code and whatever runs the
//! work. [`WorkerPool`] runs jobs on a fixed set of named threads,
//! [`DelegatingExecutor`] wraps another executor, and [`fan_out`] runs
//! sibling operations and folds their results in submission order.

mod config;
mod delegating;
mod fan_out;
mod pool;

use std::{any::Any, time::Duration};

pub use config::{ENV_PREFIX, ExecutorConfig};
pub use delegating::DelegatingExecutor;
pub use fan_out::{Operation, fan_out};
pub use pool::WorkerPool;

use crate::BuildError;

/// A unit of work accepted by an [`Executor`].
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Something that runs jobs, possibly concurrently.
pub trait Executor: Send + Sync {
    /// Submits `job` for execution.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Rejected`] once the executor has been shut down.
    fn execute(&self, job: Job) -> Result<(), BuildError>;

    /// Stops accepting new jobs. Jobs already accepted still run.
    fn shutdown(&self);

    /// Stops accepting new jobs and hands back queued jobs that never
    /// started, in submission order.
    ///
    /// Jobs already running are left to finish.
    #[must_use = "jobs that never started are lost if the returned list is dropped"]
    fn shutdown_now(&self) -> Vec<Job>;

    /// Returns `true` once [`Executor::shutdown`] has been called.
    fn is_shutdown(&self) -> bool;

    /// Returns `true` once shut down and every accepted job has finished.
    fn is_terminated(&self) -> bool;

    /// Blocks until the executor terminates or `timeout` elapses.
    ///
    /// Returns `true` if the executor terminated.
    fn await_termination(&self, timeout: Duration) -> bool;
}

/// Renders a panic payload as text.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}
