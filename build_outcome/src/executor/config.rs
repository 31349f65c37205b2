//! Layered configuration for the worker pool.
//!
//! Values are resolved from, lowest precedence first:
//!
//! 1. built-in defaults;
//! 2. an optional TOML file;
//! 3. environment variables prefixed with [`ENV_PREFIX`], such as
//!    `BUILD_OUTCOME_WORKER_THREADS`.

use std::{num::NonZeroUsize, thread};

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::BuildError;

/// Prefix for environment variables read by [`ExecutorConfig::load`].
pub const ENV_PREFIX: &str = "BUILD_OUTCOME_";

const DEFAULT_THREAD_NAME: &str = "build-worker";

/// Settings for a [`WorkerPool`](super::WorkerPool).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Number of worker threads. Defaults to the available parallelism.
    pub worker_threads: usize,
    /// Prefix for worker thread names.
    pub thread_name: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            worker_threads: thread::available_parallelism().map_or(1, NonZeroUsize::get),
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
        }
    }
}

impl ExecutorConfig {
    /// Builds the provider stack without extracting it.
    ///
    /// A missing file is skipped. Relative paths are searched for in the
    /// current directory and its parents.
    #[must_use]
    pub fn figment(file: Option<&Utf8Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path.as_std_path()));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Config`] when a provider fails or a value has
    /// the wrong type, and [`BuildError::Validation`] when a value is out of
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use build_outcome::executor::ExecutorConfig;
    /// use camino::Utf8Path;
    ///
    /// figment::Jail::expect_with(|j| {
    ///     j.create_file("executor.toml", "worker_threads = 3")?;
    ///     j.set_env("BUILD_OUTCOME_THREAD_NAME", "link");
    ///     let config = ExecutorConfig::load(Some(Utf8Path::new("executor.toml")))
    ///         .map_err(|e| e.to_string())?;
    ///     assert_eq!(config.worker_threads, 3);
    ///     assert_eq!(config.thread_name, "link");
    ///     Ok(())
    /// });
    /// ```
    pub fn load(file: Option<&Utf8Path>) -> Result<Self, BuildError> {
        let config: Self = Self::figment(file).extract().map_err(BuildError::config)?;
        config.validate()?;
        tracing::debug!(
            worker_threads = config.worker_threads,
            thread_name = %config.thread_name,
            "loaded executor configuration"
        );
        Ok(config)
    }

    /// Checks that the values can start a pool.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Validation`] naming the first offending key.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.worker_threads == 0 {
            return Err(BuildError::validation(
                "worker_threads",
                "must be at least 1",
            ));
        }
        if self.thread_name.trim().is_empty() {
            return Err(BuildError::validation("thread_name", "must not be empty"));
        }
        if self.thread_name.contains('\0') {
            return Err(BuildError::validation(
                "thread_name",
                "must not contain a NUL byte",
            ));
        }
        Ok(())
    }
}
