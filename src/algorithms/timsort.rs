//! Library sort baseline

use super::Number;

/// Sort by delegating to the standard library's stable sort.
///
/// `slice::sort` is a merge-based hybrid from the timsort family, which is
/// exactly the role this menu entry plays: the "just use the library"
/// baseline the four hand-written algorithms are measured against.
pub fn sort(values: &[Number]) -> Vec<Number> {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted
}
