//! Tests for the `Senv` loader and accessors.
//!
//! Responsibilities:
//! - Test loading env files into a store, including prefix handling.
//! - Test `set_var`/`get_var` round trips and not-found errors.
//! - Test builder configuration.
//! - Test the process-environment wiring and logging hygiene.
//!
//! Invariants:
//! - Tests that touch the real process environment use `serial_test` and
//!   `env_lock()` to prevent cross-test contamination.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `.senv.test.file` inside `dir`.
pub fn write_env_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(".senv.test.file");
    fs::write(&path, contents).expect("Failed to write env file");
    path
}
