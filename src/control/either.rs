//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. By convention `Left` carries
//! an error or alternative and `Right` carries the success value, which makes
//! `Either` the vehicle for railway-oriented pipelines:
//!
//! - [`Either::map`] and [`Either::bind`] run only on the `Right` rail
//! - once a step yields `Left`, every later step is skipped and the
//!   original `Left` flows through unchanged
//! - [`Either::match_with`] ends the pipeline by handling both rails
//!
//! # Examples
//!
//! ```rust
//! use railcar::control::Either;
//!
//! fn check(value: i32) -> Either<String, i32> {
//!     if value > 5 {
//!         Either::right(value)
//!     } else {
//!         Either::left("too small".to_string())
//!     }
//! }
//!
//! let ok = Either::<String, i32>::right(4).map(|x| x * 2).bind(check);
//! assert_eq!(ok.match_with(|_| -1, |x| x), 8);
//!
//! let skipped = Either::<String, i32>::left("bad input".to_string()).map(|x| x * 2);
//! assert_eq!(skipped.match_with(|_| -1, |x| x), -1);
//! ```

use super::error::{Variant, VariantError};
use super::maybe::Maybe;

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
/// By convention:
/// - `Left` represents failure, error, or the alternative outcome
/// - `Right` represents success
///
/// Exactly one side is populated, and no operation moves a value from one
/// side to the other without an explicit mapping call.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use railcar::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure or the alternative.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left` value.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(!right.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both sides, producing an `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` unchanged and `function` is
    /// never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the left value if present.
    ///
    /// If this is `Left(l)`, returns `Left(function(l))`.
    /// If this is `Right(r)`, returns `Right(r)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_left(|x: i32| x * 2), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a step that may fail.
    ///
    /// If this is `Right(r)`, returns `function(r)`. If this is `Left(l)`,
    /// `function` is never invoked and `Left(l)` is propagated unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let parse = |s: &str| -> Either<String, i32> {
    ///     s.parse::<i32>().map_err(|_| format!("not a number: {s}")).into()
    /// };
    ///
    /// assert_eq!(Either::right("12").bind(parse), Either::Right(12));
    /// assert_eq!(
    ///     Either::<String, &str>::left("earlier".to_string()).bind(parse),
    ///     Either::Left("earlier".to_string())
    /// );
    /// ```
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Chains a recovery step on the left rail.
    ///
    /// If this is `Left(l)`, returns `function(l)`; `Right` passes through.
    #[inline]
    pub fn bind_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Runs `action` on the right value and returns `self` unchanged.
    ///
    /// `action` is never invoked on a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let mut log = Vec::new();
    /// let value: Either<String, i32> = Either::Right(7);
    /// let value = value.tee(|x| log.push(format!("saw {x}")));
    /// assert_eq!(value, Either::Right(7));
    /// assert_eq!(log, vec!["saw 7".to_string()]);
    /// ```
    #[inline]
    #[must_use]
    pub fn tee<F>(self, action: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the left value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tee_left<F>(self, action: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            action(value);
        }
        self
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// This is the safe way to read either payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.match_with(|x| x.to_string(), |s| s), "42");
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.match_with(|x: i32| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn match_with<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Returns the right value, or `default` if this is a `Left`.
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!(
                "{}",
                VariantError::new("Either", "unwrap_left", Variant::Right)
            ),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!(
                "{}",
                VariantError::new("Either", "unwrap_right", Variant::Left)
            ),
            Self::Right(value) => value,
        }
    }

    /// Returns the left value, or a [`VariantError`] if this is a `Right`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the `Right` variant.
    #[inline]
    pub fn try_unwrap_left(self) -> Result<L, VariantError> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(VariantError::new(
                "Either",
                "try_unwrap_left",
                Variant::Right,
            )),
        }
    }

    /// Returns the right value, or a [`VariantError`] if this is a `Left`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the `Left` variant.
    #[inline]
    pub fn try_unwrap_right(self) -> Result<R, VariantError> {
        match self {
            Self::Left(_) => Err(VariantError::new(
                "Either",
                "try_unwrap_right",
                Variant::Left,
            )),
            Self::Right(value) => Ok(value),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Keeps the right value as a `Maybe`, discarding any left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::{Either, Maybe};
    ///
    /// assert_eq!(Either::<&str, i32>::right(1).to_maybe(), Maybe::Some(1));
    /// assert_eq!(Either::<&str, i32>::left("no").to_maybe(), Maybe::None);
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::None,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    /// Converts into a pair of `Option`s.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, String> = Either::left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn test_either_right_construction() {
        let value: Either<i32, String> = Either::right("hello".to_string());
        assert!(value.is_right());
        assert!(!value.is_left());
    }

    #[rstest]
    fn test_bind_skips_function_on_left() {
        let calls = Cell::new(0);
        let value: Either<&str, i32> = Either::Left("stop");
        let result = value.bind(|x| {
            calls.set(calls.get() + 1);
            Either::<&str, i32>::Right(x + 1)
        });
        assert_eq!(result, Either::Left("stop"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_bind_left_recovers() {
        let value: Either<&str, i32> = Either::Left("fallback");
        let result = value.bind_left(|_| Either::<(), i32>::Right(0));
        assert_eq!(result, Either::Right(0));
    }

    #[rstest]
    fn test_tee_and_tee_left_touch_only_their_side() {
        let right_calls = Cell::new(0);
        let left_calls = Cell::new(0);

        let right: Either<&str, i32> = Either::Right(1);
        let right = right
            .tee(|_| right_calls.set(right_calls.get() + 1))
            .tee_left(|_| left_calls.set(left_calls.get() + 1));
        assert_eq!(right, Either::Right(1));

        let left: Either<&str, i32> = Either::Left("e");
        let left = left
            .tee(|_| right_calls.set(right_calls.get() + 1))
            .tee_left(|_| left_calls.set(left_calls.get() + 1));
        assert_eq!(left, Either::Left("e"));

        assert_eq!(right_calls.get(), 1);
        assert_eq!(left_calls.get(), 1);
    }

    #[rstest]
    #[should_panic(expected = "called `Either::unwrap_right()` on a `Left` value")]
    fn test_unwrap_right_on_left_fails_fast() {
        let value: Either<&str, i32> = Either::Left("oops");
        let _ = value.unwrap_right();
    }

    #[rstest]
    fn test_try_unwrap_reports_found_variant() {
        let value: Either<&str, i32> = Either::Right(1);
        let error = value.try_unwrap_left().unwrap_err();
        assert_eq!(error.found, Variant::Right);
        assert_eq!(error.method_name, "try_unwrap_left");
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }
}
