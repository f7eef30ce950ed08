use crate::error::{Result, SenvError};

/// A string-to-string variable table.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site if the
/// store has to cross threads.
pub trait EnvStore {
    /// Look up a variable. Absent and non-Unicode values are `None`.
    fn var(&self, key: &str) -> Option<String>;

    /// Set a variable, overwriting any previous value.
    fn set_var(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: EnvStore + ?Sized> EnvStore for &T {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    #[inline]
    fn set_var(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_var(key, value)
    }
}

/// Reject names and values the process environment cannot hold.
pub(crate) fn check_var(key: &str, value: &str) -> Result<()> {
    let reason = if key.is_empty() {
        "name is empty"
    } else if key.contains('=') {
        "name contains '='"
    } else if key.contains('\0') {
        "name contains a NUL character"
    } else if value.contains('\0') {
        "value contains a NUL character"
    } else {
        return Ok(());
    };

    Err(SenvError::InvalidVariable {
        name: key.to_string(),
        reason,
    })
}
