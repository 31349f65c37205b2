//! Fan-out of sibling operations with ordered fan-in of their results.

use std::{
    panic::{self, AssertUnwindSafe},
    sync::mpsc,
};

use super::{Executor, Job, panic_message};
use crate::{BuildError, ExecutionResult};

/// A sibling operation run by [`fan_out`].
pub type Operation = Box<dyn FnOnce() -> ExecutionResult<()> + Send + 'static>;

/// Runs every operation on `executor` and merges their results.
///
/// Blocks until each accepted operation has reported. Results are folded
/// with [`ExecutionResult::with_failures`] in submission order, whatever
/// order the operations finish in, so every failure is kept.
///
/// An operation that panics contributes [`BuildError::TaskPanicked`]; one the
/// executor refuses contributes [`BuildError::Rejected`]; one the executor
/// accepts but drops unrun contributes [`BuildError::Abandoned`].
///
/// # Examples
///
/// ```
/// use build_outcome::{BuildError, ExecutionResult};
/// use build_outcome::executor::{Operation, WorkerPool, fan_out};
///
/// let pool = WorkerPool::new("siblings", 3)?;
/// let operations: Vec<Operation> = vec![
///     Box::new(|| ExecutionResult::SUCCESS),
///     Box::new(|| ExecutionResult::failed(BuildError::service_lookup("E2"))),
///     Box::new(|| ExecutionResult::failed(BuildError::service_lookup("E3"))),
/// ];
/// let merged = fan_out(&pool, operations);
/// let messages: Vec<_> = merged.failures().iter().map(ToString::to_string).collect();
/// assert_eq!(messages, ["E2", "E3"]);
/// # Ok::<(), BuildError>(())
/// ```
pub fn fan_out<E, I>(executor: &E, operations: I) -> ExecutionResult<()>
where
    E: Executor + ?Sized,
    I: IntoIterator<Item = Operation>,
{
    let (reply, replies) = mpsc::channel::<(usize, ExecutionResult<()>)>();
    let mut slots: Vec<Option<ExecutionResult<()>>> = Vec::new();
    for (index, operation) in operations.into_iter().enumerate() {
        let sender = reply.clone();
        let job: Job = Box::new(move || {
            let outcome = run_guarded(index, operation);
            if sender.send((index, outcome)).is_err() {
                tracing::debug!(index, "fan-in receiver dropped before result arrived");
            }
        });
        match executor.execute(job) {
            Ok(()) => slots.push(None),
            Err(err) => slots.push(Some(ExecutionResult::failed(err))),
        }
    }
    drop(reply);

    for (index, outcome) in replies {
        if let Some(slot) = slots.get_mut(index) {
            *slot = Some(outcome);
        }
    }

    let submitted = slots.len();
    let merged: ExecutionResult<()> = slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.unwrap_or_else(|| ExecutionResult::failed(BuildError::abandoned(task_label(index))))
        })
        .collect();
    tracing::debug!(
        operations = submitted,
        failures = merged.failures().len(),
        "fan-in complete"
    );
    merged
}

fn run_guarded(index: usize, operation: Operation) -> ExecutionResult<()> {
    panic::catch_unwind(AssertUnwindSafe(operation)).unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        tracing::warn!(index, %message, "operation panicked");
        ExecutionResult::failed(BuildError::task_panicked(task_label(index), message))
    })
}

fn task_label(index: usize) -> String {
    format!("operation #{}", index + 1)
}
