//! Running configuration loads inside a `figment::Jail`.
//!
//! The jail gives each test its own working directory and restores any
//! environment variables it sets, so configuration tests cannot leak into
//! one another.

use anyhow::{Result, anyhow};

/// Prepares a jail with `setup`, then returns what `load` produces inside it.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or `setup` fails.
///
/// # Examples
///
/// ```
/// use test_helpers::figment::load_in_jail;
///
/// let value = load_in_jail(
///     |j| {
///         j.set_env("DEMO_KEY", "on");
///         Ok(())
///     },
///     || std::env::var("DEMO_KEY").ok(),
/// )?;
/// assert_eq!(value.as_deref(), Some("on"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn load_in_jail<S, L, T>(setup: S, load: L) -> Result<T>
where
    S: FnOnce(&mut figment::Jail) -> figment::error::Result<()>,
    L: FnOnce() -> T,
{
    let mut loaded = None;
    figment::Jail::try_with(|j| {
        setup(j)?;
        loaded = Some(load());
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    loaded.ok_or_else(|| anyhow!("jail closure did not run the load step"))
}
