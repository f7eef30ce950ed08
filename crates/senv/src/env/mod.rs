//! Environment variable storage.
//!
//! Responsibilities:
//! - Define the `EnvStore` capability (lookup and set, string by string).
//! - Bind it to the real process environment (`SystemEnv`).
//! - Provide an in-memory table for tests and embedding (`InMemoryEnv`).
//!
//! Does NOT handle:
//! - Prefixing or normalizing names (see loader).
//! - Locking. `SystemEnv` writes to one process-wide table and callers must
//!   not mutate it from several threads at once.
//!
//! Invariants:
//! - Names that are empty or contain `=` or NUL, and values containing NUL,
//!   are rejected with `SenvError::InvalidVariable` before anything is written.
//!
//! # Examples
//!
//! ```
//! use senv::{EnvStore, InMemoryEnv};
//!
//! let env = InMemoryEnv::new();
//! env.set_var("APP_PORT", "8080").unwrap();
//! assert_eq!(env.var("APP_PORT").as_deref(), Some("8080"));
//! ```

mod in_memory;
mod store;
mod system;

pub use in_memory::InMemoryEnv;
pub use store::EnvStore;
pub(crate) use store::check_var;
pub use system::SystemEnv;
