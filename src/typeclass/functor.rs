//! Functor type class - mapping over a payload.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Both laws are checked with property tests in `tests/typeclass_laws.rs`.

use super::higher::TypeConstructor;
use crate::control::{Either, Maybe};

/// A type class for containers whose payload can be transformed.
///
/// # Examples
///
/// ```rust
/// use railcar::control::Maybe;
/// use railcar::typeclass::Functor;
///
/// let x = Maybe::some(5);
/// assert_eq!(x.fmap(|n| n.to_string()), Maybe::Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the payload, keeping the container's shape.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the payload with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the payload, replacing it with `Unit`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::{Either, Unit};
    /// use railcar::typeclass::Functor;
    ///
    /// let x: Either<&str, i32> = Either::Right(5);
    /// assert_eq!(x.void(), Either::Right(Unit));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<crate::control::Unit>
    where
        Self: Sized,
    {
        self.replace(crate::control::Unit)
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Unit;
    use rstest::rstest;

    #[rstest]
    fn maybe_fmap_some() {
        assert_eq!(Maybe::some(2).fmap(|x| x * 3), Maybe::Some(6));
    }

    #[rstest]
    fn maybe_fmap_none() {
        assert_eq!(Maybe::<i32>::none().fmap(|x| x * 3), Maybe::None);
    }

    #[rstest]
    fn either_fmap_left_untouched() {
        let value: Either<&str, i32> = Either::Left("e");
        assert_eq!(value.fmap(|x| x * 3), Either::Left("e"));
    }

    #[rstest]
    fn maybe_replace_and_void() {
        assert_eq!(Maybe::some(1).replace("x"), Maybe::Some("x"));
        assert_eq!(Maybe::<i32>::none().void(), Maybe::None);
        assert_eq!(Maybe::some(1).void(), Maybe::Some(Unit));
    }
}
