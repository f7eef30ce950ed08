//! Namespace prefix management.
//!
//! The prefix lives in the env store itself under `SENV_PREFIX`, so child
//! processes can rebuild variable names without any other protocol.

use super::Senv;
use crate::constants::PREFIX_VAR;
use crate::env::EnvStore;
use crate::error::{Result, SenvError};
use crate::normalize::normalize;

impl<E: EnvStore> Senv<E> {
    /// Normalize `prefix` and store it under `SENV_PREFIX`.
    ///
    /// # Errors
    ///
    /// Returns `SenvError::EmptyPrefix` if `prefix` is blank.
    pub fn set_prefix(&self, prefix: &str) -> Result<()> {
        let prefix = normalize(prefix);
        if prefix.is_empty() {
            return Err(SenvError::EmptyPrefix);
        }
        self.env.set_var(PREFIX_VAR, &prefix)?;
        tracing::debug!(prefix = %prefix, "Set env prefix");
        Ok(())
    }

    /// The active prefix, installing the default prefix if none is set.
    ///
    /// An existing `SENV_PREFIX` is returned verbatim.
    pub fn prefix(&self) -> Result<String> {
        if let Some(prefix) = self.env.var(PREFIX_VAR) {
            return Ok(prefix);
        }

        tracing::debug!(prefix = %self.default_prefix, "No env prefix set, using default");
        self.set_prefix(&self.default_prefix)?;
        Ok(self.default_prefix.clone())
    }
}
