//! Whole-file number list I/O
//!
//! Input files are plain text with integers separated by arbitrary
//! whitespace (spaces, tabs, newlines).  Output files carry one integer per
//! line.  Both directions are single whole-file operations with no
//! partial-write recovery and no retries; a failure is reported once through
//! [`SortError`] and the user re-invokes manually.

use crate::algorithms::Number;
use crate::runner::errors::SortError;
use log::debug;
use std::fs;
use std::path::Path;

/// Parse a whitespace-separated integer file into a number list.
///
/// Any token that does not parse as an `i64` (including out-of-range
/// integers) fails the entire load.
pub fn load_numbers(path: &Path) -> Result<Vec<Number>, SortError> {
    let text = fs::read_to_string(path).map_err(|e| SortError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut numbers = Vec::new();
    for token in text.split_whitespace() {
        let number = token
            .parse::<Number>()
            .map_err(|_| SortError::MalformedToken {
                path: path.to_path_buf(),
                token: token.to_string(),
            })?;
        numbers.push(number);
    }

    debug!("parsed {} tokens from {}", numbers.len(), path.display());
    Ok(numbers)
}

/// Write a number list, one integer per line, with a trailing newline.
pub fn save_numbers(path: &Path, numbers: &[Number]) -> Result<(), SortError> {
    let mut text = String::new();
    for number in numbers {
        text.push_str(&number.to_string());
        text.push('\n');
    }

    fs::write(path, text).map_err(|e| SortError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
