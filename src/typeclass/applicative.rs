//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends [`Functor`] with [`pure`](Applicative::pure), which
//! lifts a plain value into the container, and [`map2`](Applicative::map2),
//! which combines two containers that do not depend on each other.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(id).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```

use super::functor::Functor;
use crate::control::{Either, Maybe};

/// A type class for functors that can lift values and combine containers.
///
/// # Examples
///
/// ```rust
/// use railcar::control::{Either, Maybe};
/// use railcar::typeclass::Applicative;
///
/// let x: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(x, Maybe::Some(42));
///
/// let a: Either<&str, i32> = Either::Right(3);
/// let b: Either<&str, i32> = Either::Right(4);
/// assert_eq!(a.map2(b, |x, y| x + y), Either::Right(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    ///
    /// If either side is empty (`None`) or failed (`Left`), so is the result.
    /// For `Either`, the receiver's `Left` wins when both sides failed.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the payloads of two containers.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function held in `self` to the value held in `other`.
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some(function(a, b)),
            _ => Maybe::None,
        }
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
        }
    }
}
