//! Error types for senv.
//!
//! Responsibilities:
//! - Define error variants for every parsing, prefix and environment failure.
//! - Carry enough context (paths, keys, line numbers) to diagnose a bad file.
//!
//! Does NOT handle:
//! - Logging. Errors are returned to the caller and never logged here.
//! - Recovery. Every error is terminal for the call that produced it.
//!
//! Invariants:
//! - `NotSet` names the requested key and the composite variable, never the
//!   (empty) looked-up value.
//! - `LineMismatch` is only produced by direct extraction; file reads skip
//!   non-matching lines before extraction is attempted.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading env files or touching the env store.
#[derive(Error, Debug)]
pub enum SenvError {
    #[error("Failed to read env file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid assignment grammar '{pattern}': {message}")]
    InvalidGrammar { pattern: String, message: String },

    #[error("Unable to match line to the assignment grammar: {line:?}")]
    LineMismatch { line: String },

    /// A key appeared twice in one file. The second value is not kept.
    #[error("Key value [{key}: {value}] on line {line} already exists, duplicate entry in file")]
    DuplicateKey {
        key: String,
        value: String,
        line: usize,
    },

    #[error("'{key}' was not set in env vars (looked up {var})")]
    NotSet { key: String, var: String },

    #[error("Invalid environment variable {name:?}: {reason}")]
    InvalidVariable { name: String, reason: &'static str },

    #[error("Prefix must contain at least one non-whitespace character")]
    EmptyPrefix,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SenvError>;
