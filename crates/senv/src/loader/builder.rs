//! Builder for [`Senv`] handles.
//!
//! Responsibilities:
//! - Choose the env store, the fallback prefix and the assignment grammar.
//!
//! Invariants / Assumptions:
//! - The default prefix is normalized at build time and must not be blank.
//! - Unset options fall back to `SystemEnv`, `DEFAULT_PREFIX` and
//!   `Grammar::assignment()`.

use super::Senv;
use crate::constants::DEFAULT_PREFIX;
use crate::env::{EnvStore, SystemEnv};
use crate::error::{Result, SenvError};
use crate::grammar::Grammar;
use crate::normalize::normalize;

/// Builder that configures a [`Senv`] handle.
#[derive(Debug)]
pub struct SenvBuilder<E = SystemEnv> {
    env: E,
    default_prefix: String,
    grammar: Option<Grammar>,
}

impl Default for SenvBuilder<SystemEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl SenvBuilder<SystemEnv> {
    /// Create a builder targeting the process environment.
    pub fn new() -> Self {
        Self {
            env: SystemEnv,
            default_prefix: DEFAULT_PREFIX.to_string(),
            grammar: None,
        }
    }
}

impl<E: EnvStore> SenvBuilder<E> {
    /// Write variables to `env` instead.
    pub fn with_env<F: EnvStore>(self, env: F) -> SenvBuilder<F> {
        SenvBuilder {
            env,
            default_prefix: self.default_prefix,
            grammar: self.grammar,
        }
    }

    /// Prefix installed when `SENV_PREFIX` is not set.
    pub fn with_default_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_prefix = prefix.into();
        self
    }

    /// Grammar used to recognize assignment lines.
    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = Some(grammar);
        self
    }

    /// Build the handle.
    ///
    /// # Errors
    ///
    /// Returns `SenvError::EmptyPrefix` if the default prefix is blank.
    pub fn build(self) -> Result<Senv<E>> {
        let default_prefix = normalize(&self.default_prefix);
        if default_prefix.is_empty() {
            return Err(SenvError::EmptyPrefix);
        }

        Ok(Senv {
            env: self.env,
            default_prefix,
            grammar: self.grammar.unwrap_or_default(),
        })
    }
}
