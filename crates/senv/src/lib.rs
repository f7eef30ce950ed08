//! Dead simple environment variable management.
//!
//! `senv` reads `key = value` files and writes each pair into the process
//! environment under a namespace prefix, so child processes written in any
//! language can read them back with a plain environment lookup.
//!
//! # File format
//!
//! ```text
//! // VALUES - Inline style comments are ignored.
//!
//! key = value
//! key2 = value
//!
//! // VALUE GROUP - Tabs are ignored.
//!     etc = another value
//!
//! ----------------
//! Random block text is also ignored.
//! ----------------
//! ```
//!
//! Keys may contain letters, digits, underscores and spaces. Keys and values
//! have surrounding whitespace trimmed, and a key defined twice is an error.
//! Keys are stored as `PREFIX_ALL_UPPERCASE_AND_UNDERSCORED`. The prefix
//! itself lives in `SENV_PREFIX`; it defaults to `BL_SENV_PACKAGE` and a file
//! can override it with a `SENV_PREFIX = ...` line.
//!
//! # Usage
//!
//! ```no_run
//! senv::load("/absolute/path/to/env.file")?;
//!
//! let region = senv::get_var("aws region")?;
//! senv::set_var("started by", "scheduler")?;
//!
//! // Children inherit the variables.
//! std::process::Command::new("node").arg("path/to/index.js").status()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! A child process rebuilds a name the same way, joining first and normalizing
//! the whole name, for example in Node:
//!
//! ```text
//! const getVar = key =>
//!   process.env[`${process.env.SENV_PREFIX}_${key}`.trim().toUpperCase().replaceAll(" ", "_")];
//! ```
//!
//! Use [`Senv`] with an [`InMemoryEnv`] to work against a private table
//! instead of the process environment.

pub mod constants;
pub mod env;
mod error;
mod grammar;
mod loader;
mod normalize;
mod reader;

pub use env::{EnvStore, InMemoryEnv, SystemEnv};
pub use error::{Result, SenvError};
pub use grammar::{Assignment, Grammar, classify, extract};
pub use loader::{Senv, SenvBuilder, get_var, load, set_var};
pub use normalize::normalize;
pub use reader::{KeyValueMap, parse_str, read_file, read_from};
