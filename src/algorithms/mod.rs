//! The five sorting algorithms
//!
//! Each function takes a borrowed slice and returns a freshly allocated
//! vector containing the same multiset of values, sorted ascending:
//! - [`timsort`]: delegation to the standard library sort (the baseline)
//! - [`quicksort`]: recursive three-way quicksort with a fixed middle pivot
//! - [`merge`]: top-down merge sort, stable
//! - [`bubble`]: adjacent-swap passes
//! - [`selection`]: repeated minimum extraction
//!
//! # Purity
//!
//! None of the functions mutates its input.  The loaded list therefore
//! survives every run unchanged, and re-sorting the same data with a
//! different algorithm or order is always possible and deterministic.
//!
//! Descending output is not an algorithm concern: the runner reverses the
//! ascending result after the fact.

pub mod bubble;
pub mod merge;
pub mod quicksort;
pub mod selection;
pub mod timsort;

/// Integer type under sort (64-bit signed)
pub type Number = i64;
