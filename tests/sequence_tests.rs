//! Tests for the sequence combinators.
//!
//! - `map`/`filter` are lazy and preserve order
//! - `fold` matches manual accumulation
//! - `reduce` seeds with the first element and yields `T::default()` when empty

use proptest::prelude::*;
use railcar::control::{Either, Maybe, Unit};
use railcar::sequence;
use rstest::rstest;

// =============================================================================
// Unit Tests
// =============================================================================

#[rstest]
fn fold_sums_one_to_four() {
    assert_eq!(sequence::fold(vec![1, 2, 3, 4], 0, |sum, x| sum + x), 10);
}

#[rstest]
fn reduce_max_of_five_three_eight() {
    assert_eq!(sequence::reduce(vec![5, 3, 8], i32::max), 8);
}

#[rstest]
#[case::integers(sequence::reduce(Vec::<i32>::new(), |a, b| a + b), 0)]
#[case::single(sequence::reduce(vec![7], |a, b| a + b), 7)]
fn reduce_edge_cases(#[case] actual: i32, #[case] expected: i32) {
    assert_eq!(actual, expected);
}

#[rstest]
fn reduce_empty_strings_yields_empty_string() {
    let joined = sequence::reduce(Vec::<String>::new(), |a, b| a + &b);
    assert_eq!(joined, String::new());
}

#[rstest]
fn try_reduce_distinguishes_empty() {
    assert_eq!(sequence::try_reduce(0..0, |a, b| a + b), Maybe::None);
    assert_eq!(sequence::try_reduce(1..=3, |a, b| a * b), Maybe::Some(6));
}

#[rstest]
fn filter_is_lazy_until_consumed() {
    let mut evaluated = 0;
    let filtered = sequence::filter(1..=10, |x| {
        evaluated += 1;
        x % 2 == 0
    });
    let first_two: Vec<i32> = filtered.take(2).collect();
    assert_eq!(first_two, vec![2, 4]);
    assert_eq!(evaluated, 4);
}

#[rstest]
fn map_restarts_over_a_stable_source() {
    let source = vec![1, 2, 3];
    let first: Vec<i32> = sequence::map(&source, |x| x * 10).collect();
    let second: Vec<i32> = sequence::map(&source, |x| x * 10).collect();
    assert_eq!(first, second);
}

#[rstest]
fn for_each_returns_unit() {
    let mut total = 0;
    assert_eq!(sequence::for_each([1, 2, 3], |x| total += x), Unit);
    assert_eq!(total, 6);
}

#[rstest]
fn choose_keeps_present_values() {
    let evens: Vec<i32> = sequence::choose(1..=6, |x| Maybe::some(x).filter(|x| x % 2 == 0)).collect();
    assert_eq!(evens, vec![2, 4, 6]);
}

#[rstest]
fn traverse_collects_all_rights() {
    let parsed: Either<String, Vec<i32>> = sequence::traverse(["1", "2", "3"], |s| {
        Either::from(s.parse::<i32>().map_err(|e| e.to_string()))
    });
    assert_eq!(parsed, Either::Right(vec![1, 2, 3]));
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Filter then map produces the same elements as a manual loop
    #[test]
    fn prop_filter_then_map_matches_manual_loop(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let combined: Vec<i64> = sequence::map(
            sequence::filter(values.clone(), |x| x % 3 != 0),
            |x| i64::from(x) * 2,
        )
        .collect();

        let mut manual = Vec::new();
        for value in values {
            if value % 3 != 0 {
                manual.push(i64::from(value) * 2);
            }
        }

        prop_assert_eq!(combined, manual);
    }

    /// Fold matches manual accumulation
    #[test]
    fn prop_fold_matches_manual_accumulation(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let folded = sequence::fold(values.clone(), 0_i64, |sum, x| sum + i64::from(x));

        let mut manual = 0_i64;
        for value in values {
            manual += i64::from(value);
        }

        prop_assert_eq!(folded, manual);
    }

    /// Reduce agrees with try_reduce on non-empty input
    #[test]
    fn prop_reduce_agrees_with_try_reduce(values in prop::collection::vec(any::<i32>(), 1..50)) {
        let reduced = sequence::reduce(values.clone(), i32::max);
        let strict = sequence::try_reduce(values.clone(), i32::max);
        prop_assert_eq!(Maybe::some(reduced), strict);
        prop_assert_eq!(Some(reduced), values.into_iter().max());
    }

    /// Partition keeps every element on its own side, in order
    #[test]
    fn prop_partition_preserves_order(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let eithers: Vec<Either<i32, i32>> = values
            .iter()
            .map(|&x| if x < 0 { Either::Left(x) } else { Either::Right(x) })
            .collect();
        let (lefts, rights) = sequence::partition(eithers);
        let expected_lefts: Vec<i32> = values.iter().copied().filter(|x| *x < 0).collect();
        let expected_rights: Vec<i32> = values.iter().copied().filter(|x| *x >= 0).collect();
        prop_assert_eq!(lefts, expected_lefts);
        prop_assert_eq!(rights, expected_rights);
    }
}
