//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! For `Maybe` and `Either`, `flat_map` is the inherent `bind`, so these laws
//! are the laws of the railway: a `None`/`Left` short-circuits every later
//! step.
//!
//! # Examples
//!
//! ```rust
//! use railcar::control::Maybe;
//! use railcar::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     Maybe::from(s.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Maybe::some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::some(n * 2));
//! assert_eq!(result, Maybe::Some(84));
//! ```

use super::applicative::Applicative;
use crate::control::{Either, Maybe};

/// A type class for applicatives whose next step can depend on the payload.
pub trait Monad: Applicative {
    /// Applies a function returning a container and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`, matching the standard library's naming.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first payload.
    ///
    /// A failed `self` propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    /// use railcar::typeclass::Monad;
    ///
    /// let ok: Either<&str, i32> = Either::Right(1);
    /// assert_eq!(ok.then(Either::Right("next")), Either::Right("next"));
    ///
    /// let failed: Either<&str, i32> = Either::Left("stop");
    /// assert_eq!(failed.then(Either::Right("next")), Either::Left("stop"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.bind(function)
    }
}
