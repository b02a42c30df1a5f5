//! Recursive three-way quicksort

use super::Number;

/// Sort with a three-way quicksort.
///
/// The pivot is always the middle element of the current subsequence.  The
/// values are partitioned into strictly-less, equal, and strictly-greater
/// groups; the two inequality groups are sorted recursively and the three are
/// concatenated.  Duplicates of the pivot land in the equal group and are
/// never recursed on.
///
/// The fixed pivot choice degrades to O(n²) comparisons on sorted and
/// reverse-sorted input.  It is kept (rather than randomized) so repeated
/// runs over the same data behave identically.
pub fn sort(values: &[Number]) -> Vec<Number> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let pivot = values[values.len() / 2];

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for &value in values {
        if value < pivot {
            less.push(value);
        } else if value > pivot {
            greater.push(value);
        } else {
            equal.push(value);
        }
    }

    let mut sorted = sort(&less);
    sorted.append(&mut equal);
    sorted.extend(sort(&greater));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse_into_equal_partition() {
        assert_eq!(sort(&[2, 2, 2, 2]), vec![2, 2, 2, 2]);
        assert_eq!(sort(&[3, 1, 3, 1, 3]), vec![1, 1, 3, 3, 3]);
    }

    #[test]
    fn test_already_sorted_input() {
        let input: Vec<Number> = (0..64).collect();
        assert_eq!(sort(&input), input);
    }

    #[test]
    fn test_reverse_sorted_input() {
        let input: Vec<Number> = (0..64).rev().collect();
        let mut expected = input.clone();
        expected.reverse();
        assert_eq!(sort(&input), expected);
    }
}
