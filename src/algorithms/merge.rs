//! Top-down merge sort

use super::Number;

/// Sort with a top-down merge sort.
///
/// Splits at the midpoint, sorts each half recursively, and merges linearly.
/// Ties in the merge step take from the left half first, making the sort
/// stable.
pub fn sort(values: &[Number]) -> Vec<Number> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let mid = values.len() / 2;
    let left = sort(&values[..mid]);
    let right = sort(&values[mid..]);
    merge(&left, &right)
}

fn merge(left: &[Number], right: &[Number]) -> Vec<Number> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    merged
}
