//! Loading env files into namespaced environment variables.
//!
//! Responsibilities:
//! - Provide the `Senv` handle that reads env files and writes their pairs to
//!   an `EnvStore` under the active prefix.
//! - Get, set and lazily initialize the prefix (see prefix.rs).
//! - Provide a builder (`SenvBuilder`) for the default prefix, grammar and store.
//!
//! Does NOT handle:
//! - Line parsing or duplicate detection (see reader.rs and grammar.rs).
//! - Removing variables. Nothing set here is ever unset.
//!
//! Invariants / Assumptions:
//! - A `SENV_PREFIX` entry in a file is applied before any other variable.
//! - Composite names are `normalize(prefix + "_" + key)`; values are stored verbatim.
//! - `load` does not roll back: variables set before a failure stay set.

mod builder;
mod prefix;

#[cfg(test)]
mod tests;

use std::path::Path;

pub use builder::SenvBuilder;

use crate::constants::{DEFAULT_PREFIX, KEY_SEPARATOR, PREFIX_VAR};
use crate::env::{EnvStore, SystemEnv};
use crate::error::{Result, SenvError};
use crate::grammar::Grammar;
use crate::normalize::normalize;
use crate::reader::{KeyValueMap, read_file_with};

/// Loads env files into an [`EnvStore`] under a namespace prefix.
#[derive(Debug, Clone)]
pub struct Senv<E = SystemEnv> {
    env: E,
    default_prefix: String,
    grammar: Grammar,
}

impl Senv<SystemEnv> {
    /// A handle over the real process environment with default settings.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }

    /// Start configuring a handle.
    pub fn builder() -> SenvBuilder {
        SenvBuilder::new()
    }
}

impl Default for Senv<SystemEnv> {
    fn default() -> Self {
        Self::system()
    }
}

impl<E: EnvStore> Senv<E> {
    /// A handle over `env` with the default prefix and built-in grammar.
    pub fn new(env: E) -> Self {
        Self {
            env,
            default_prefix: DEFAULT_PREFIX.to_string(),
            grammar: Grammar::assignment(),
        }
    }

    /// The store variables are written to.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Prefix installed when `SENV_PREFIX` is absent.
    pub fn default_prefix(&self) -> &str {
        &self.default_prefix
    }

    /// Grammar used to recognize assignment lines.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Read the env file at `path` and set every pair it defines.
    ///
    /// # Errors
    ///
    /// Returns the first read error (missing file, duplicate key) before
    /// anything is written. Otherwise returns the last error from setting a
    /// variable; the variables set before and after it stay set.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading env file");

        let key_values = read_file_with(path, &self.grammar)?;
        self.apply(&key_values)
    }

    /// Set every pair of an already-read map.
    ///
    /// A `SENV_PREFIX` entry is applied first and is not itself namespaced.
    ///
    /// # Errors
    ///
    /// A failure to apply `SENV_PREFIX` aborts before any other variable is
    /// set. Failures of individual variables do not stop the rest; the last
    /// one is returned.
    pub fn apply(&self, key_values: &KeyValueMap) -> Result<()> {
        if let Some(prefix) = key_values.get(PREFIX_VAR) {
            self.set_prefix(prefix)?;
        }

        let mut applied = 0usize;
        let mut last_err = None;
        for (key, value) in key_values.iter().filter(|(k, _)| k.as_str() != PREFIX_VAR) {
            match self.set_var(key, value) {
                Ok(()) => applied += 1,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Failed to set variable from env file");
                    last_err = Some(e);
                }
            }
        }

        tracing::debug!(applied, total = key_values.len(), "Applied env file variables");

        match last_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Set `key` under the active prefix, creating the prefix if needed.
    ///
    /// The value is stored verbatim.
    pub fn set_var(&self, key: &str, value: &str) -> Result<()> {
        let var = self.var_name(key)?;
        self.env.set_var(&var, value)?;
        tracing::trace!(var = %var, "Set environment variable");
        Ok(())
    }

    /// Look up `key` under the active prefix.
    ///
    /// # Errors
    ///
    /// Returns `SenvError::NotSet` if the variable was never set.
    pub fn get_var(&self, key: &str) -> Result<String> {
        let var = self.var_name(key)?;
        self.env.var(&var).ok_or_else(|| SenvError::NotSet {
            key: key.to_string(),
            var,
        })
    }

    /// The composite variable name `set_var` and `get_var` use for `key`.
    ///
    /// Child processes can read this name directly.
    pub fn var_name(&self, key: &str) -> Result<String> {
        let prefix = self.prefix()?;
        Ok(normalize(&format!("{prefix}{KEY_SEPARATOR}{key}")))
    }
}

/// Load the env file at `path` into the process environment.
///
/// ```no_run
/// if let Err(e) = senv::load("/absolute/path/to/env.file") {
///     eprintln!("failed to load env file: {e}");
/// }
/// ```
pub fn load(path: impl AsRef<Path>) -> Result<()> {
    Senv::system().load(path)
}

/// Set a namespaced variable in the process environment.
///
/// ```no_run
/// senv::set_var("key string", "value string").unwrap();
/// ```
pub fn set_var(key: &str, value: &str) -> Result<()> {
    Senv::system().set_var(key, value)
}

/// Read a namespaced variable from the process environment.
///
/// ```no_run
/// match senv::get_var("some key") {
///     Ok(value) => println!("{value}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
pub fn get_var(key: &str) -> Result<String> {
    Senv::system().get_var(key)
}
