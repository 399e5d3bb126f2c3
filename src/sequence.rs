//! Combinators over ordered sequences.
//!
//! These free functions accept anything that implements [`IntoIterator`]
//! (slices, `Vec`, ranges, iterators, even [`Maybe`]) and follow the same
//! algebraic shape as the container combinators:
//!
//! - [`map`], [`filter`], [`choose`] are lazy and preserve order
//! - [`for_each`], [`fold`], [`reduce`], [`try_reduce`], [`partition`],
//!   [`traverse`] are eager and visit elements in order
//!
//! # Examples
//!
//! ```rust
//! use railcar::sequence;
//!
//! let evens_doubled: Vec<i32> =
//!     sequence::map(sequence::filter(1..=6, |x| x % 2 == 0), |x| x * 2).collect();
//! assert_eq!(evens_doubled, vec![4, 8, 12]);
//!
//! assert_eq!(sequence::fold([1, 2, 3, 4], 0, |sum, x| sum + x), 10);
//! assert_eq!(sequence::reduce([5, 3, 8], i32::max), 8);
//! ```
//!
//! # Empty Sequences
//!
//! [`reduce`] seeds itself with the first element, so it has nothing to
//! return for an empty sequence. It returns `T::default()` in that case
//! rather than failing. Use [`try_reduce`] to observe emptiness instead.

use crate::control::{Either, Maybe, Unit};

/// Lazily applies `function` to every element.
///
/// Element `i` of the output is `function` applied to element `i` of the
/// input. Nothing runs until the result is consumed.
#[inline]
pub fn map<I, R, F>(sequence: I, function: F) -> impl Iterator<Item = R>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    sequence.into_iter().map(function)
}

/// Lazily keeps the elements for which `predicate` holds, in order.
#[inline]
pub fn filter<I, P>(sequence: I, predicate: P) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence.into_iter().filter(predicate)
}

/// Lazily applies `function` and keeps only the present results.
///
/// # Examples
///
/// ```rust
/// use railcar::control::Maybe;
/// use railcar::sequence;
///
/// let parsed: Vec<i32> = sequence::choose(["1", "x", "3"], |s| Maybe::from(s.parse::<i32>().ok())).collect();
/// assert_eq!(parsed, vec![1, 3]);
/// ```
#[inline]
pub fn choose<I, R, F>(sequence: I, mut function: F) -> impl Iterator<Item = R>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Maybe<R>,
{
    sequence
        .into_iter()
        .filter_map(move |item| Option::from(function(item)))
}

/// Runs `action` on every element, in order.
///
/// A panic raised by `action` propagates immediately and the remaining
/// elements are not visited.
pub fn for_each<I, F>(sequence: I, mut action: F) -> Unit
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    for item in sequence {
        action(item);
    }
    Unit
}

/// Left fold: accumulates every element into `seed`, in order.
#[inline]
pub fn fold<I, S, F>(sequence: I, seed: S, combine: F) -> S
where
    I: IntoIterator,
    F: FnMut(S, I::Item) -> S,
{
    sequence.into_iter().fold(seed, combine)
}

/// Folds the sequence using its first element as the seed.
///
/// Returns `T::default()` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use railcar::sequence;
///
/// assert_eq!(sequence::reduce([5, 3, 8], i32::max), 8);
/// assert_eq!(sequence::reduce(Vec::<i32>::new(), i32::max), 0);
/// ```
#[inline]
pub fn reduce<I, F>(sequence: I, combine: F) -> I::Item
where
    I: IntoIterator,
    I::Item: Default,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    try_reduce(sequence, combine).get_or_else_with(Default::default)
}

/// Folds the sequence using its first element as the seed.
///
/// Returns `Maybe::None` for an empty sequence.
#[inline]
pub fn try_reduce<I, F>(sequence: I, combine: F) -> Maybe<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    Maybe::from(sequence.into_iter().reduce(combine))
}

/// Splits a sequence of `Either` into its left and right payloads, keeping
/// the relative order on each side.
pub fn partition<I, L, R>(sequence: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();
    for item in sequence {
        match item {
            Either::Left(value) => lefts.push(value),
            Either::Right(value) => rights.push(value),
        }
    }
    (lefts, rights)
}

/// Applies `function` to every element and collects the right payloads.
///
/// Stops at the first `Left`, which becomes the result; later elements are
/// not visited.
///
/// # Examples
///
/// ```rust
/// use railcar::control::Either;
/// use railcar::sequence;
///
/// let positive = |x: i32| if x > 0 { Either::right(x) } else { Either::left(x) };
/// assert_eq!(sequence::traverse([1, 2, 3], positive), Either::Right(vec![1, 2, 3]));
/// assert_eq!(sequence::traverse([1, -2, -3], positive), Either::Left(-2));
/// ```
pub fn traverse<I, L, R, F>(sequence: I, mut function: F) -> Either<L, Vec<R>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Either<L, R>,
{
    sequence
        .into_iter()
        .map(|item| Result::from(function(item)))
        .collect::<Result<Vec<R>, L>>()
        .into()
}
