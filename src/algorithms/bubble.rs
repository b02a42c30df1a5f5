//! Bubble sort

use super::Number;

/// Sort with bubble sort: repeated adjacent-swap passes over a copy.
///
/// Runs the full pass structure of the textbook form, with pass `i` bubbling
/// the largest remaining value into position `n - i - 1`.  O(n²), which is
/// fine at the interactive list sizes this tool handles.
pub fn sort(values: &[Number]) -> Vec<Number> {
    let mut sorted = values.to_vec();
    let n = sorted.len();

    for i in 0..n {
        for j in 0..n - i - 1 {
            if sorted[j] > sorted[j + 1] {
                sorted.swap(j, j + 1);
            }
        }
    }

    sorted
}
