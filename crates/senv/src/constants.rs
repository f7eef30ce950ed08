//! Centralized constants for senv.
//!
//! This module holds the reserved variable name, the fallback prefix and the
//! built-in assignment grammar so every module agrees on them.

// =============================================================================
// Prefix
// =============================================================================

/// Reserved environment variable holding the active namespace prefix.
pub const PREFIX_VAR: &str = "SENV_PREFIX";

/// Prefix installed on first access when `SENV_PREFIX` is not set.
pub const DEFAULT_PREFIX: &str = "BL_SENV_PACKAGE";

/// Joins the prefix and the key into the composite variable name.
pub const KEY_SEPARATOR: &str = "_";

// =============================================================================
// File Format
// =============================================================================

/// Built-in assignment grammar.
///
/// Group 1 is the key: letters, digits, underscores and spaces, starting with a
/// non-space character. Group 2 is the value: everything after the first `=`,
/// which must contain at least one non-whitespace character.
pub const ASSIGNMENT_PATTERN: &str = r"^\s*([A-Za-z0-9_][A-Za-z0-9_ ]*)\s*=\s*(\S.*)$";
