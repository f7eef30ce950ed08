use std::cell::RefCell;
use std::collections::HashMap;

use super::{EnvStore, check_var};
use crate::error::Result;

/// Won't touch the global process environment.
///
/// Uses `RefCell` for interior mutability, so all methods take `&self`.
/// It applies the same name and value checks as [`SystemEnv`](super::SystemEnv),
/// which keeps tests honest about what the real environment accepts.
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert without validation; for seeding fixtures.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.vars.borrow_mut().clear();
    }
}

impl EnvStore for InMemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.borrow().get(key).cloned()
    }

    fn set_var(&self, key: &str, value: &str) -> Result<()> {
        check_var(key, value)?;
        self.set(key, value);
        Ok(())
    }
}
