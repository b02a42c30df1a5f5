//! Algorithm registry
//!
//! The algorithm set is closed: [`Algorithm`] is a plain enum and its
//! name → function → explanation mapping is fixed at compile time, process
//! wide.  [`Registry`] adds the one piece of runtime machinery, a name index
//! built once so the selection boundary can resolve user-supplied text to an
//! [`Algorithm`] or fail with [`SortError::InvalidAlgorithm`].  There is no
//! silent default.

use crate::algorithms::{bubble, merge, quicksort, selection, timsort, Number};
use crate::runner::errors::SortError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Signature shared by the five sort functions
pub type SortFn = fn(&[Number]) -> Vec<Number>;

/// The closed set of selectable sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Timsort,
    Quicksort,
    MergeSort,
    BubbleSort,
    SelectionSort,
}

impl Algorithm {
    /// Every algorithm, in menu order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Timsort,
        Algorithm::Quicksort,
        Algorithm::MergeSort,
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
    ];

    /// User-facing display name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Timsort => "Timsort",
            Algorithm::Quicksort => "Quicksort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
        }
    }

    /// The sort function this algorithm dispatches to
    pub fn sort_fn(self) -> SortFn {
        match self {
            Algorithm::Timsort => timsort::sort,
            Algorithm::Quicksort => quicksort::sort,
            Algorithm::MergeSort => merge::sort,
            Algorithm::BubbleSort => bubble::sort,
            Algorithm::SelectionSort => selection::sort,
        }
    }

    /// Educational description of how the algorithm works
    pub fn explanation(self) -> &'static str {
        match self {
            Algorithm::Timsort => {
                "Timsort is a hybrid sorting algorithm derived from merge sort and insertion \
                 sort. It divides the array into small segments, sorts them using insertion \
                 sort, and then merges them using merge sort."
            }
            Algorithm::Quicksort => {
                "Quicksort is a divide-and-conquer algorithm. It works by selecting a 'pivot' \
                 element and partitioning the other elements into two sub-arrays, according to \
                 whether they are less than or greater than the pivot. The sub-arrays are then \
                 sorted recursively."
            }
            Algorithm::MergeSort => {
                "Merge Sort is a divide-and-conquer algorithm that divides the array into two \
                 halves, sorts each half, and then merges the sorted halves to produce the \
                 final sorted array."
            }
            Algorithm::BubbleSort => {
                "Bubble Sort repeatedly steps through the list, compares adjacent elements, \
                 and swaps them if they are in the wrong order. The pass through the list is \
                 repeated until the list is sorted."
            }
            Algorithm::SelectionSort => {
                "Selection Sort divides the input list into two parts: a sorted sublist of \
                 items which is built up from left to right and a sublist of the remaining \
                 unsorted items. The algorithm proceeds by finding the smallest element in the \
                 unsorted sublist, swapping it with the leftmost unsorted element, and moving \
                 the sublist boundaries one element to the right."
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sort direction, applied after the core (ascending) sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// User-facing display name
    pub fn name(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }

    /// Parse a user-supplied order name, `None` if unrecognized
    pub fn resolve(name: &str) -> Option<SortOrder> {
        match name.to_lowercase().as_str() {
            "ascending" | "asc" => Some(SortOrder::Ascending),
            "descending" | "desc" => Some(SortOrder::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name index over the closed algorithm set
pub struct Registry {
    by_name: FxHashMap<String, Algorithm>,
}

impl Registry {
    /// Build the name index once: canonical display names plus lowercase,
    /// hyphenated, and squashed spellings, so "Merge Sort", "merge sort",
    /// "merge-sort", and "mergesort" all resolve to the same entry.
    pub fn new() -> Self {
        let mut by_name = FxHashMap::default();
        for algorithm in Algorithm::ALL {
            let canonical = algorithm.name();
            let lower = canonical.to_lowercase();
            by_name.insert(canonical.to_string(), algorithm);
            by_name.insert(lower.replace(' ', "-"), algorithm);
            by_name.insert(lower.replace(' ', ""), algorithm);
            by_name.insert(lower, algorithm);
        }
        Registry { by_name }
    }

    /// Resolve a user-supplied name to an algorithm.
    ///
    /// Unknown names are not reachable through the normal selection boundary
    /// (the set is closed), but anything that does arrive here unrecognized
    /// is rejected rather than defaulted.
    pub fn resolve(&self, name: &str) -> Result<Algorithm, SortError> {
        if let Some(&algorithm) = self.by_name.get(name) {
            return Ok(algorithm);
        }
        self.by_name
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| SortError::InvalidAlgorithm {
                name: name.to_string(),
            })
    }

    /// Resolve both halves of the dispatch mapping at once: the sort
    /// function and the fixed explanation string.
    #[allow(dead_code)] // library surface; the binary resolves and dispatches separately
    pub fn dispatch(&self, name: &str) -> Result<(SortFn, &'static str), SortError> {
        let algorithm = self.resolve(name)?;
        Ok((algorithm.sort_fn(), algorithm.explanation()))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_resolve() {
        let registry = Registry::new();
        for algorithm in Algorithm::ALL {
            assert_eq!(registry.resolve(algorithm.name()).unwrap(), algorithm);
        }
    }

    #[test]
    fn test_cli_spellings_resolve() {
        let registry = Registry::new();
        assert_eq!(registry.resolve("merge-sort").unwrap(), Algorithm::MergeSort);
        assert_eq!(registry.resolve("MERGE SORT").unwrap(), Algorithm::MergeSort);
        assert_eq!(registry.resolve("bubblesort").unwrap(), Algorithm::BubbleSort);
        assert_eq!(registry.resolve("timsort").unwrap(), Algorithm::Timsort);
        assert_eq!(
            registry.resolve("selection-sort").unwrap(),
            Algorithm::SelectionSort
        );
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let registry = Registry::new();
        match registry.resolve("bogosort") {
            Err(SortError::InvalidAlgorithm { name }) => assert_eq!(name, "bogosort"),
            other => panic!("expected InvalidAlgorithm, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_returns_function_and_explanation() {
        let registry = Registry::new();
        let (sort, explanation) = registry.dispatch("Quicksort").unwrap();
        assert_eq!(sort(&[3, 1, 2]), vec![1, 2, 3]);
        assert!(explanation.contains("pivot"));
    }

    #[test]
    fn test_order_names_resolve() {
        assert_eq!(SortOrder::resolve("ascending"), Some(SortOrder::Ascending));
        assert_eq!(SortOrder::resolve("DESC"), Some(SortOrder::Descending));
        assert_eq!(SortOrder::resolve("sideways"), None);
    }
}
