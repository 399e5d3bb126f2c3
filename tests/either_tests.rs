//! Unit tests for Either<L, R> type.
//!
//! Either represents a value that can be one of two types:
//! - `Left(L)`: the error or alternative outcome
//! - `Right(R)`: the success value
//!
//! Pipelines built from `map`, `bind` and `tee` run only on the right rail.

use railcar::control::{Either, Maybe, Variant};
use rstest::rstest;
use std::cell::RefCell;

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn either_left_is_left() {
    let value: Either<i32, String> = Either::left(42);
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn either_right_is_right() {
    let value: Either<i32, String> = Either::right("hello".to_string());
    assert!(value.is_right());
    assert!(!value.is_left());
}

// =============================================================================
// Reference Extraction
// =============================================================================

#[rstest]
fn either_left_ref_extraction() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.left_ref(), Some(&42));
    assert_eq!(value.right_ref(), None);
}

#[rstest]
fn either_as_ref_keeps_variant() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(value.as_ref().map(String::len), Either::Right(5));
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn either_map_on_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(value.map(|s| s.len()), Either::Right(5));
}

#[rstest]
fn either_map_on_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.map(|s: String| s.len()), Either::Left(42));
}

#[rstest]
fn either_map_left_on_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.map_left(|x| x * 2), Either::Left(84));
}

#[rstest]
fn either_map_left_on_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(
        value.map_left(|x: i32| x * 2),
        Either::Right("hello".to_string())
    );
}

#[rstest]
fn either_bimap_on_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));
}

// =============================================================================
// Railway Pipelines
// =============================================================================

fn at_least_six(value: i32) -> Either<String, i32> {
    if value > 5 {
        Either::right(value)
    } else {
        Either::left("too small".to_string())
    }
}

#[rstest]
fn either_pipeline_on_right_reaches_end() {
    let result = Either::<String, i32>::right(4)
        .map(|x| x * 2)
        .bind(at_least_six)
        .match_with(|_| -1, |x| x);
    assert_eq!(result, 8);
}

#[rstest]
fn either_pipeline_on_left_skips_map() {
    let mapped = RefCell::new(false);
    let result = Either::<String, i32>::left("bad input".to_string())
        .map(|x| {
            *mapped.borrow_mut() = true;
            x * 2
        })
        .match_with(|_| -1, |x| x);
    assert_eq!(result, -1);
    assert!(!*mapped.borrow());
}

#[rstest]
fn either_pipeline_switches_rail_at_failing_step() {
    let steps = RefCell::new(Vec::new());
    let result = Either::<String, i32>::right(1)
        .tee(|_| steps.borrow_mut().push("start"))
        .bind(at_least_six)
        .tee(|_| steps.borrow_mut().push("validated"))
        .map(|x| x + 1);
    assert_eq!(result, Either::Left("too small".to_string()));
    assert_eq!(*steps.borrow(), vec!["start"]);
}

#[rstest]
fn either_bind_left_recovers_to_right() {
    let result = Either::<String, i32>::left("missing".to_string())
        .bind_left(|_| Either::<String, i32>::right(0))
        .map(|x| x + 1);
    assert_eq!(result, Either::Right(1));
}

#[rstest]
fn either_tee_left_logs_failures_only() {
    let failures = RefCell::new(Vec::new());
    let values: Vec<Either<&str, i32>> = vec![Either::Right(1), Either::Left("boom")];
    for value in values {
        let _ = value.tee_left(|error| failures.borrow_mut().push(*error));
    }
    assert_eq!(*failures.borrow(), vec!["boom"]);
}

// =============================================================================
// Extraction and Conversion
// =============================================================================

#[rstest]
#[case(Either::Right(3), 3)]
#[case(Either::Left("no"), 0)]
fn either_get_or_else(#[case] value: Either<&str, i32>, #[case] expected: i32) {
    assert_eq!(value.get_or_else(0), expected);
}

#[rstest]
fn either_swap_left_to_right() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.swap(), Either::Right(42));
}

#[rstest]
fn either_to_maybe_drops_left() {
    let left: Either<&str, i32> = Either::Left("e");
    let right: Either<&str, i32> = Either::Right(1);
    assert_eq!(left.to_maybe(), Maybe::None);
    assert_eq!(right.to_maybe(), Maybe::Some(1));
}

#[rstest]
fn either_into_options() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.into_options(), (Some(42), None));
}

// =============================================================================
// Unchecked Access Fails Fast
// =============================================================================

#[rstest]
fn either_unwrap_right_success() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(value.unwrap_right(), "hello".to_string());
}

#[rstest]
#[should_panic(expected = "called `Either::unwrap_left()` on a `Right` value")]
fn either_unwrap_left_panic() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    value.unwrap_left();
}

#[rstest]
#[should_panic(expected = "called `Either::unwrap_right()` on a `Left` value")]
fn either_unwrap_right_panic() {
    let value: Either<i32, String> = Either::Left(42);
    value.unwrap_right();
}

#[rstest]
fn either_try_unwrap_right_on_left_is_error() {
    let value: Either<i32, String> = Either::Left(42);
    let error = value.try_unwrap_right().unwrap_err();
    assert_eq!(error.found, Variant::Left);
    assert_eq!(
        error.to_string(),
        "called `Either::try_unwrap_right()` on a `Left` value"
    );
}

// =============================================================================
// Result Conversion
// =============================================================================

#[rstest]
fn either_from_result() {
    let ok: Result<i32, String> = Ok(42);
    let either: Either<String, i32> = ok.into();
    assert_eq!(either, Either::Right(42));

    let err: Result<i32, String> = Err("error".to_string());
    let either: Either<String, i32> = err.into();
    assert_eq!(either, Either::Left("error".to_string()));
}
