//! Assignment grammar, line classification and key/value extraction.
//!
//! Responsibilities:
//! - Compile and validate the regex grammar that recognizes `key = value` lines.
//! - Classify raw lines as assignments or ignorable noise.
//! - Extract trimmed key/value pairs from matching lines.
//!
//! Does NOT handle:
//! - Reading files or detecting duplicates (see reader.rs).
//! - Key normalization (see normalize.rs).
//!
//! Invariants:
//! - `classify` and `extract` share one match rule, so a line `classify` accepts
//!   always extracts successfully and vice versa.
//! - A match requires both captures to be non-empty after trimming.
//! - Grammar errors are raised when the grammar is compiled, never per line.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::ASSIGNMENT_PATTERN;
use crate::error::{Result, SenvError};

static ASSIGNMENT: LazyLock<Grammar> = LazyLock::new(|| Grammar {
    regex: Regex::new(ASSIGNMENT_PATTERN).expect("built-in assignment grammar compiles"),
});

/// A compiled assignment grammar.
///
/// Capture group 1 is the key and capture group 2 is the value.
#[derive(Debug, Clone)]
pub struct Grammar {
    regex: Regex,
}

impl Grammar {
    /// Compile a custom grammar.
    ///
    /// # Errors
    ///
    /// Returns `SenvError::InvalidGrammar` if the pattern does not compile or
    /// defines fewer than two capture groups.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| SenvError::InvalidGrammar {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        // captures_len counts the implicit whole-match group.
        if regex.captures_len() < 3 {
            return Err(SenvError::InvalidGrammar {
                pattern: pattern.to_string(),
                message: "grammar must define key and value capture groups".to_string(),
            });
        }

        Ok(Self { regex })
    }

    /// The built-in `key = value` grammar.
    pub fn assignment() -> Self {
        ASSIGNMENT.clone()
    }

    /// Source pattern this grammar was compiled from.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    fn captures<'l>(&self, line: &'l str) -> Option<(&'l str, &'l str)> {
        let caps = self.regex.captures(line)?;
        let key = caps.get(1)?.as_str().trim();
        let value = caps.get(2)?.as_str().trim();
        if key.is_empty() || value.is_empty() {
            return None;
        }
        Some((key, value))
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::assignment()
    }
}

/// A trimmed key/value pair taken from one assignment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub value: String,
}

/// Returns `true` if `line` is an assignment under `grammar`.
///
/// Comments, blank lines, prose and lines with an empty side are not
/// assignments. They are not errors either.
pub fn classify(grammar: &Grammar, line: &str) -> bool {
    grammar.captures(line).is_some()
}

/// Extract the key and value from an assignment line.
///
/// # Errors
///
/// Returns `SenvError::LineMismatch` if the line is not an assignment, for
/// example `key =` with nothing after the `=`, or `= value` with no key.
pub fn extract(grammar: &Grammar, line: &str) -> Result<Assignment> {
    let (key, value) = grammar
        .captures(line)
        .ok_or_else(|| SenvError::LineMismatch {
            line: line.to_string(),
        })?;

    Ok(Assignment {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> Grammar {
        Grammar::assignment()
    }

    #[test]
    fn test_classify_detects_assignments() {
        let g = grammar();
        assert!(classify(&g, "this = that"));
        assert!(classify(&g, "nospace=pass"));
        assert!(classify(&g, "\tetc = another value"));
        assert!(classify(&g, "key with spaces = value with = sign"));
    }

    #[test]
    fn test_classify_ignores_noise() {
        let g = grammar();
        for line in [
            "",
            "    ",
            "// VALUES - Inline style comments are ignored.",
            "----------------",
            "Random block text is also ignored.",
            "// commented = out",
            "no valu",
            "no value =",
            "space value =  ",
            "=  no key",
            "     =  space key",
            "key-with-dash = value",
        ] {
            assert!(!classify(&g, line), "expected {line:?} to be ignored");
        }
    }

    #[test]
    fn test_extract_trims_key_and_value() {
        let g = grammar();
        let cases = [
            ("simple = pass", "simple", "pass"),
            ("nospace=pass", "nospace", "pass"),
            ("    extraspace = pass     ", "extraspace", "pass"),
            ("\tkey\t=\tvalue\t", "key", "value"),
            ("url = https://x.example/?a=b", "url", "https://x.example/?a=b"),
        ];
        for (line, key, value) in cases {
            let assignment = extract(&g, line).unwrap();
            assert_eq!(assignment.key, key, "key for {line:?}");
            assert_eq!(assignment.value, value, "value for {line:?}");
        }
    }

    #[test]
    fn test_extract_rejects_empty_sides() {
        let g = grammar();
        for line in ["no value =", "space value =  ", "no valu", "=  no key", "     =  space key"] {
            let result = extract(&g, line);
            assert!(
                matches!(result, Err(SenvError::LineMismatch { .. })),
                "expected mismatch for {line:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_invalid_grammar_is_rejected() {
        let result = Grammar::new(")(");
        assert!(matches!(result, Err(SenvError::InvalidGrammar { .. })));

        let result = Grammar::new("[");
        assert!(matches!(result, Err(SenvError::InvalidGrammar { .. })));
    }

    #[test]
    fn test_grammar_without_groups_is_rejected() {
        let result = Grammar::new("(//).+");
        match result {
            Err(SenvError::InvalidGrammar { pattern, message }) => {
                assert_eq!(pattern, "(//).+");
                assert!(message.contains("capture groups"));
            }
            other => panic!("expected InvalidGrammar, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_grammar_shares_match_rule() {
        // Unanchored grammar accepts whitespace-only values at the regex level;
        // classify and extract must still agree on rejecting them.
        let g = Grammar::new("([a-zA-Z0-9_ ]+)=(.+)").unwrap();
        assert!(!classify(&g, "space value =  "));
        assert!(extract(&g, "space value =  ").is_err());

        assert!(classify(&g, "this = that"));
        let assignment = extract(&g, "this = that").unwrap();
        assert_eq!(assignment.key, "this");
        assert_eq!(assignment.value, "that");
    }

    #[test]
    fn test_assignment_grammar_pattern() {
        assert_eq!(grammar().pattern(), ASSIGNMENT_PATTERN);
        assert_eq!(Grammar::default().pattern(), ASSIGNMENT_PATTERN);
    }
}
