//! Error types for loading, running, and saving
//!
//! This module defines [`SortError`], which covers the full taxonomy: file
//! I/O failures, ordering mistakes at the session level (run before load,
//! save before run), statistics over an empty sequence, and unrecognized
//! algorithm names reaching the dispatcher.
//!
//! All of these are recoverable: each is reported once at the boundary that
//! detects it and the tool remains usable for the next attempt.  I/O
//! failures are never retried automatically.

use std::fmt;
use std::path::PathBuf;

/// Everything that can go wrong between loading a file and saving a result
#[derive(Debug, Clone)]
pub enum SortError {
    /// Input file missing or unreadable
    FileRead { path: PathBuf, message: String },

    /// A token in the input file did not parse as a 64-bit integer
    MalformedToken { path: PathBuf, token: String },

    /// A run was requested before any file was loaded
    NoFileLoaded,

    /// A save was requested before any run produced a result
    NoSortedData,

    /// Statistics were requested over an empty sequence (mean is undefined)
    EmptyResultStats,

    /// An algorithm name outside the closed set reached the dispatcher
    InvalidAlgorithm { name: String },

    /// Output file could not be written
    FileWrite { path: PathBuf, message: String },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::FileRead { path, message } => {
                write!(f, "Cannot read '{}': {}", path.display(), message)
            }
            SortError::MalformedToken { path, token } => {
                write!(
                    f,
                    "File '{}' contains a non-integer token: '{}'",
                    path.display(),
                    token
                )
            }
            SortError::NoFileLoaded => {
                write!(f, "No file loaded; open a numbers file first")
            }
            SortError::NoSortedData => {
                write!(f, "No sorted data to save; run a sort first")
            }
            SortError::EmptyResultStats => {
                write!(f, "Statistics are undefined for an empty sequence")
            }
            SortError::InvalidAlgorithm { name } => {
                write!(f, "Unknown sorting algorithm '{}'", name)
            }
            SortError::FileWrite { path, message } => {
                write!(f, "Cannot write '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for SortError {}
