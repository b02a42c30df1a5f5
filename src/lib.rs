//! # Introduction
//!
//! sortcap loads a list of integers from a text file, sorts it with one of
//! five user-selectable algorithms, and reports the sorted sequence together
//! with timing, summary statistics, and a short explanation of how the chosen
//! algorithm works.  The sorted sequence can be saved back to a text file.
//!
//! ## Run pipeline
//!
//! ```text
//! numbers.txt → fileio → Session → registry dispatch → sort → SortResult → report
//! ```
//!
//! 1. [`fileio`] — whole-file load of whitespace-separated integers, and
//!    one-integer-per-line save.
//! 2. [`registry`] — the closed [`registry::Algorithm`] set with its fixed
//!    name → function → explanation mapping, and user-input name resolution.
//! 3. [`algorithms`] — the five sort functions; pure, ascending, input
//!    preserved.
//! 4. [`runner`] — the [`runner::engine::Session`] context object and the run
//!    orchestrator producing [`runner::engine::SortResult`]s.
//! 5. [`stats`] — min/max/mean/count over a sorted sequence.
//! 6. [`report`] — plain-text result rendering; not part of the stable
//!    library API.
//!
//! ## Algorithm menu
//!
//! Timsort (library sort baseline), Quicksort (fixed middle pivot, three-way
//! partition), Merge Sort (stable, left-first ties), Bubble Sort, and
//! Selection Sort.  Descending output is the reversed ascending result, never
//! a separate sort.

pub mod algorithms;
pub mod fileio;
pub mod registry;
pub mod report;
pub mod runner;
pub mod stats;
