//! Key normalization.

/// Convert a raw key into `UPPERCASE_WITH_UNDERSCORES` form.
///
/// Trims surrounding whitespace, upper-cases every character and replaces each
/// remaining space with `_`. Other punctuation is left alone, and applying it
/// twice gives the same result as applying it once.
///
/// ```
/// assert_eq!(senv::normalize("  word of life  "), "WORD_OF_LIFE");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase().replace(' ', "_")
}
