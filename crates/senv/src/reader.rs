//! Env file reading.
//!
//! Responsibilities:
//! - Open an env file and scan it line by line.
//! - Build a deduplicated map of raw trimmed keys to trimmed values.
//!
//! Does NOT handle:
//! - Normalizing or prefixing keys (done when variables are set, see loader).
//! - Writing to the environment.
//!
//! Invariants:
//! - A key appearing twice aborts the scan with `SenvError::DuplicateKey`;
//!   the second value never overwrites the first.
//! - Any error discards the partial map.
//! - Non-assignment lines are skipped without error.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SenvError};
use crate::grammar::{Grammar, classify, extract};

/// Raw trimmed key to trimmed value, as read from one file.
pub type KeyValueMap = BTreeMap<String, String>;

/// Read an env file with the built-in grammar.
///
/// # Errors
///
/// Returns `SenvError::Io` if the file cannot be opened or read, and
/// `SenvError::DuplicateKey` if a key is defined twice.
pub fn read_file(path: impl AsRef<Path>) -> Result<KeyValueMap> {
    read_file_with(path.as_ref(), &Grammar::assignment())
}

pub(crate) fn read_file_with(path: &Path, grammar: &Grammar) -> Result<KeyValueMap> {
    let io_err = |source: std::io::Error| SenvError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    match read_from(BufReader::new(file), grammar) {
        Err(SenvError::Read(source)) => Err(io_err(source)),
        other => other,
    }
}

/// Scan any buffered reader for assignments under `grammar`.
///
/// # Errors
///
/// Returns `SenvError::Read` on an I/O failure mid-scan, and
/// `SenvError::DuplicateKey` if a key is defined twice.
pub fn read_from<R: BufRead>(reader: R, grammar: &Grammar) -> Result<KeyValueMap> {
    let mut key_values = KeyValueMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if !classify(grammar, &line) {
            continue;
        }

        let assignment = extract(grammar, &line)?;
        match key_values.entry(assignment.key) {
            Entry::Occupied(entry) => {
                return Err(SenvError::DuplicateKey {
                    key: entry.key().clone(),
                    value: assignment.value,
                    line: idx + 1,
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(assignment.value);
            }
        }
    }

    Ok(key_values)
}

/// Parse env file contents held in memory with the built-in grammar.
///
/// # Errors
///
/// Returns `SenvError::DuplicateKey` if a key is defined twice.
pub fn parse_str(contents: &str) -> Result<KeyValueMap> {
    read_from(contents.as_bytes(), &Grammar::assignment())
}
