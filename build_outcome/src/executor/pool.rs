//! Fixed-size pool of named worker threads.

use std::{
    fmt,
    panic::{self, AssertUnwindSafe},
    io,
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::{Duration, Instant},
};

use parking_lot::{Condvar, Mutex};

use super::{Executor, ExecutorConfig, Job, panic_message};
use crate::BuildError;

/// Count of live workers, signalled whenever one exits.
#[derive(Default)]
struct Liveness {
    live: Mutex<usize>,
    exited: Condvar,
}

/// Decrements the live count when a worker exits, including by unwinding.
struct ExitGuard(Arc<Liveness>);

impl Drop for ExitGuard {
    fn drop(&mut self) {
        let mut live = self.0.live.lock();
        *live = live.saturating_sub(1);
        self.0.exited.notify_all();
    }
}

/// Runs jobs on a fixed number of threads fed from a shared queue.
///
/// Jobs start in submission order. After [`Executor::shutdown`] the pool
/// rejects new jobs, drains the queue, and its threads exit.
/// [`Executor::shutdown_now`] instead hands the queued jobs back unrun. Dropping the
/// pool shuts it down without waiting.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use build_outcome::executor::{Executor, WorkerPool};
///
/// let pool = WorkerPool::new("compile", 2)?;
/// pool.execute(Box::new(|| {}))?;
/// pool.shutdown();
/// assert!(pool.await_termination(Duration::from_secs(5)));
/// # Ok::<(), build_outcome::BuildError>(())
/// ```
pub struct WorkerPool {
    name: String,
    sender: Mutex<Option<Sender<Job>>>,
    queue: Arc<Mutex<Receiver<Job>>>,
    liveness: Arc<Liveness>,
}

impl WorkerPool {
    /// Starts `threads` workers named `{name}-{index}`.
    ///
    /// A request for zero threads starts one.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::WorkerSpawn`] if a thread cannot be started,
    /// including when `name` contains a NUL byte. Workers already started
    /// are shut down.
    pub fn new(name: impl Into<String>, threads: usize) -> Result<Self, BuildError> {
        let prefix = name.into();
        if prefix.contains('\0') {
            return Err(BuildError::WorkerSpawn {
                thread: format!("{}-0", prefix.escape_default()),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "thread name must not contain a NUL byte",
                ),
            });
        }
        let (sender, receiver) = mpsc::channel::<Job>();
        let pool = Self {
            name: prefix,
            sender: Mutex::new(Some(sender)),
            queue: Arc::new(Mutex::new(receiver)),
            liveness: Arc::new(Liveness::default()),
        };
        let workers = threads.max(1);
        for index in 0..workers {
            pool.spawn_worker(index)?;
        }
        tracing::debug!(pool = %pool.name, workers, "worker pool started");
        Ok(pool)
    }

    /// Starts a pool sized and named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::WorkerSpawn`] if a thread cannot be started.
    pub fn from_config(config: &ExecutorConfig) -> Result<Self, BuildError> {
        Self::new(config.thread_name.clone(), config.worker_threads)
    }

    /// Name used as the prefix of every worker thread.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn reject(&self) -> BuildError {
        tracing::warn!(pool = %self.name, "rejecting job submitted after shutdown");
        BuildError::rejected(&self.name)
    }

    fn spawn_worker(&self, index: usize) -> Result<(), BuildError> {
        let thread_name = format!("{}-{index}", self.name);
        let queue = Arc::clone(&self.queue);
        let liveness = Arc::clone(&self.liveness);
        *liveness.live.lock() += 1;
        let guard = ExitGuard(liveness);
        let worker = thread_name.clone();
        thread::Builder::new()
            .name(thread_name.clone())
            .spawn(move || {
                let _exit = guard;
                run_worker(&worker, &queue);
            })
            .map(drop)
            .map_err(|source| BuildError::WorkerSpawn {
                thread: thread_name,
                source,
            })
    }
}

fn run_worker(worker: &str, queue: &Mutex<Receiver<Job>>) {
    loop {
        let next = queue.lock().recv();
        let Ok(job) = next else {
            break;
        };
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(job)) {
            tracing::warn!(
                worker,
                message = %panic_message(payload.as_ref()),
                "job panicked"
            );
        }
    }
    tracing::trace!(worker, "worker exiting");
}

impl Executor for WorkerPool {
    fn execute(&self, job: Job) -> Result<(), BuildError> {
        let sender = self.sender.lock();
        let Some(queue) = sender.as_ref() else {
            return Err(self.reject());
        };
        queue.send(job).map_err(|_| self.reject())
    }

    fn shutdown(&self) {
        if self.sender.lock().take().is_some() {
            tracing::debug!(pool = %self.name, "worker pool shutting down");
        }
    }

    fn shutdown_now(&self) -> Vec<Job> {
        self.shutdown();
        let queue = self.queue.lock();
        let pending: Vec<Job> = queue.try_iter().collect();
        tracing::debug!(
            pool = %self.name,
            pending = pending.len(),
            "worker pool stopped; returning jobs that never started"
        );
        pending
    }

    fn is_shutdown(&self) -> bool {
        self.sender.lock().is_none()
    }

    fn is_terminated(&self) -> bool {
        self.is_shutdown() && *self.liveness.live.lock() == 0
    }

    fn await_termination(&self, timeout: Duration) -> bool {
        let deadline = Instant::now().checked_add(timeout);
        let mut live = self.liveness.live.lock();
        while *live > 0 {
            match deadline {
                Some(until) => {
                    if self
                        .liveness
                        .exited
                        .wait_until(&mut live, until)
                        .timed_out()
                    {
                        return *live == 0;
                    }
                }
                None => self.liveness.exited.wait(&mut live),
            }
        }
        true
    }
}

impl fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerPool")
            .field("name", &self.name)
            .field("shutdown", &self.is_shutdown())
            .field("live_workers", &*self.liveness.live.lock())
            .finish()
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}
