use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sortcap::algorithms::Number;
use sortcap::registry::{Algorithm, SortOrder};
use sortcap::runner::engine::run;

/// Ascending baseline every algorithm must agree with.
fn reference_sorted(values: &[Number]) -> Vec<Number> {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted
}

#[test]
fn test_all_algorithms_agree_on_fixed_inputs() {
    let cases: Vec<Vec<Number>> = vec![
        vec![],
        vec![7],
        vec![5, 3, 3, 1],
        vec![1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1],
        vec![0, -1, 1, -2, 2, 0],
        vec![Number::MAX, Number::MIN, 0, -1, 1],
    ];

    for case in &cases {
        let expected = reference_sorted(case);
        for algorithm in Algorithm::ALL {
            let sorted = algorithm.sort_fn()(case);
            assert_eq!(
                sorted,
                expected,
                "{} disagrees with the baseline on {:?}",
                algorithm.name(),
                case
            );
        }
    }
}

#[test]
fn test_random_inputs_sort_to_ordered_permutations() {
    let mut rng = StdRng::seed_from_u64(0x5042);

    for _ in 0..8 {
        let len = rng.gen_range(0..200);
        let input: Vec<Number> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();
        let expected = reference_sorted(&input);

        for algorithm in Algorithm::ALL {
            let sorted = algorithm.sort_fn()(&input);
            assert!(
                sorted.windows(2).all(|w| w[0] <= w[1]),
                "{} output is not non-decreasing",
                algorithm.name()
            );
            // Same multiset: sorting both sides makes them comparable
            assert_eq!(
                sorted,
                expected,
                "{} output is not a permutation of the input",
                algorithm.name()
            );
        }
    }
}

#[test]
fn test_descending_is_reverse_of_ascending() {
    let input = vec![4, -2, 9, 9, 0, 3];

    for algorithm in Algorithm::ALL {
        let ascending = run(&input, algorithm, SortOrder::Ascending);
        let descending = run(&input, algorithm, SortOrder::Descending);

        let mut reversed = ascending.numbers.clone();
        reversed.reverse();
        assert_eq!(
            descending.numbers,
            reversed,
            "{} descending is not the reversed ascending result",
            algorithm.name()
        );
    }
}

#[test]
fn test_sorted_input_is_returned_unchanged() {
    let input: Vec<Number> = vec![-5, -5, 0, 1, 8, 13];

    for algorithm in Algorithm::ALL {
        assert_eq!(
            algorithm.sort_fn()(&input),
            input,
            "{} is not idempotent on sorted input",
            algorithm.name()
        );
    }
}

#[test]
fn test_empty_and_single_element_boundaries() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.sort_fn()(&[]), Vec::<Number>::new());
        assert_eq!(algorithm.sort_fn()(&[42]), vec![42]);
    }

    let result = run(&[], Algorithm::Timsort, SortOrder::Ascending);
    assert!(result.numbers.is_empty());
    assert!(result.stats.is_none(), "empty input must not produce stats");
}

#[test]
fn test_bubble_sort_worked_example() {
    let result = run(&[5, 3, 3, 1], Algorithm::BubbleSort, SortOrder::Ascending);

    assert_eq!(result.numbers, vec![1, 3, 3, 5]);
    let stats = result.stats.expect("four values must produce stats");
    assert_eq!(stats.min, 1);
    assert_eq!(stats.max, 5);
    assert_eq!(stats.mean, 3.0);
    assert_eq!(stats.count, 4);
}

#[test]
fn test_quicksort_descending_worked_example() {
    let result = run(&[5, 3, 3, 1], Algorithm::Quicksort, SortOrder::Descending);
    assert_eq!(result.numbers, vec![5, 3, 3, 1]);
}

#[test]
fn test_stats_describe_the_result_regardless_of_order() {
    let ascending = run(&[2, -4, 6], Algorithm::MergeSort, SortOrder::Ascending);
    let descending = run(&[2, -4, 6], Algorithm::MergeSort, SortOrder::Descending);

    let asc_stats = ascending.stats.expect("stats");
    let desc_stats = descending.stats.expect("stats");
    assert_eq!(asc_stats, desc_stats);
    assert_eq!(asc_stats.min, -4);
    assert_eq!(asc_stats.max, 6);
}
