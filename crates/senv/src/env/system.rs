use std::env;

use super::{EnvStore, check_var};
use crate::error::Result;

/// Zero-sized type that delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvStore for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn set_var(&self, key: &str, value: &str) -> Result<()> {
        check_var(key, value)?;
        // SAFETY: senv is synchronous and never spawns threads. Callers that
        // mutate the environment from several threads must serialize access.
        unsafe {
            env::set_var(key, value);
        }
        Ok(())
    }
}
