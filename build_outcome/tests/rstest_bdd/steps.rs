//! Steps declaring sibling operations, merging them, and checking the result.

use std::{sync::Arc, time::Duration};

use anyhow::{Result, anyhow, ensure};
use build_outcome::executor::{Executor, WorkerPool, fan_out};
use build_outcome::{BuildError, Cause, ExecutionResult};
use rstest_bdd_macros::{given, then, when};
use test_helpers::{
    failures::{checked, labels},
    text::{label_list, numbered_entries},
};

use crate::fixtures::{FanInContext, Sibling};

#[given("a sibling that succeeds with \"{value}\"")]
fn sibling_succeeds(fan_in_context: &FanInContext, value: String) {
    fan_in_context.push_sibling(Sibling::Succeeds(value));
}

#[given("a sibling that fails with \"{label}\"")]
fn sibling_fails(fan_in_context: &FanInContext, label: String) {
    fan_in_context.push_sibling(Sibling::Fails(checked(&label)));
}

#[given("a sibling that cannot find the service \"{service}\"")]
fn sibling_lookup_fails(fan_in_context: &FanInContext, service: String) -> Result<()> {
    ensure!(
        fan_in_context.lookup.is_empty(),
        "lookup failure already declared"
    );
    let cause: Cause = Arc::new(BuildError::service_lookup(format!(
        "no service of type {service}"
    )));
    fan_in_context.lookup.set(Arc::clone(&cause));
    fan_in_context.push_sibling(Sibling::Fails(cause));
    Ok(())
}

fn take_siblings(fan_in_context: &FanInContext) -> Result<Vec<Sibling>> {
    fan_in_context
        .siblings
        .take()
        .ok_or_else(|| anyhow!("no siblings declared"))
}

#[when("the siblings are run on a worker pool")]
fn run_on_pool(fan_in_context: &FanInContext) -> Result<()> {
    let siblings = take_siblings(fan_in_context)?;
    let pool = WorkerPool::new("bdd", siblings.len())?;
    let merged = fan_out(&pool, siblings.into_iter().map(Sibling::into_operation));
    pool.shutdown();
    ensure!(
        pool.await_termination(Duration::from_secs(10)),
        "worker pool did not terminate"
    );
    fan_in_context.merged.set(merged);
    Ok(())
}

#[when("the siblings are folded in order")]
fn fold_in_order(fan_in_context: &FanInContext) -> Result<()> {
    let siblings = take_siblings(fan_in_context)?;
    let merged = siblings
        .into_iter()
        .map(Sibling::run)
        .fold(ExecutionResult::success(), ExecutionResult::with_failures);
    fan_in_context.merged.set(merged);
    Ok(())
}

fn with_merged<T>(
    fan_in_context: &FanInContext,
    inspect: impl FnOnce(&ExecutionResult<()>) -> T,
) -> Result<T> {
    fan_in_context
        .merged
        .with_ref(inspect)
        .ok_or_else(|| anyhow!("siblings have not been merged"))
}

#[then("the merged result has {count:usize} failures")]
fn failure_count(fan_in_context: &FanInContext, count: usize) -> Result<()> {
    let found = with_merged(fan_in_context, |merged| merged.failures().len())?;
    ensure!(found == count, "expected {count} failures, found {found}");
    let succeeded = with_merged(fan_in_context, ExecutionResult::is_success)?;
    ensure!(succeeded == (count == 0), "success flag disagrees with failures");
    Ok(())
}

#[then("the failures read {expected}")]
fn failures_read(fan_in_context: &FanInContext, expected: String) -> Result<()> {
    let found = with_merged(fan_in_context, |merged| labels(merged.failures()))?;
    let wanted = label_list(&expected);
    ensure!(found == wanted, "expected {wanted:?}, found {found:?}");
    Ok(())
}

#[then("rethrowing raises a composite of {expected}")]
fn rethrow_composite(fan_in_context: &FanInContext, expected: String) -> Result<()> {
    let err = with_merged(fan_in_context, ExecutionResult::rethrow)?
        .err()
        .ok_or_else(|| anyhow!("expected rethrow to raise"))?;
    ensure!(
        matches!(err.downcast_ref::<BuildError>(), Some(BuildError::Multiple(_))),
        "expected a composite failure, got {err:?}"
    );
    let wanted = label_list(&expected);
    let found = numbered_entries(&err.to_string());
    ensure!(found == wanted, "expected {wanted:?}, found {found:?}");
    Ok(())
}

#[then("rethrowing raises the original lookup failure")]
fn rethrow_original(fan_in_context: &FanInContext) -> Result<()> {
    let original = fan_in_context
        .lookup
        .get()
        .ok_or_else(|| anyhow!("no lookup failure declared"))?;
    let err = with_merged(fan_in_context, ExecutionResult::rethrow)?
        .err()
        .ok_or_else(|| anyhow!("expected rethrow to raise"))?;
    ensure!(
        Arc::ptr_eq(&err, &original),
        "lookup failure was wrapped: {err}"
    );
    Ok(())
}
