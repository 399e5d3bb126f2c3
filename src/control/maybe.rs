//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, which is either `Some(T)` or
//! `None`. It models absence without a null sentinel: the only ways to get
//! at the payload are the combinators and [`Maybe::match_with`], which force
//! the caller to handle both cases.
//!
//! `Maybe` converts freely to and from [`Option`], so it plugs into the
//! standard library wherever that is more convenient.
//!
//! # Examples
//!
//! ```rust
//! use railcar::control::Maybe;
//!
//! let name = Maybe::some("ferris")
//!     .filter(|name| !name.is_empty())
//!     .map(str::to_uppercase)
//!     .match_with(|name| name, || "anonymous".to_string());
//! assert_eq!(name, "FERRIS");
//! ```

use super::either::Either;
use super::error::{Variant, VariantError};

/// A value that is either present (`Some`) or absent (`None`).
///
/// The variant and payload are fixed at construction; every combinator
/// consumes the receiver and returns a new value.
///
/// # Type Parameters
///
/// * `T` - The type of the payload
///
/// # Examples
///
/// ```rust
/// use railcar::control::Maybe;
///
/// let present = Maybe::some(21);
/// assert_eq!(present.map(|x| x * 2), Maybe::Some(42));
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert_eq!(absent.map(|x| x * 2), Maybe::None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an empty `Maybe`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `None` value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the payload, producing a `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the payload if present.
    ///
    /// `None` is returned unchanged and `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Maybe;
    ///
    /// assert_eq!(Maybe::some("four").map(str::len), Maybe::Some(4));
    /// assert_eq!(Maybe::<&str>::none().map(str::len), Maybe::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains a step that may itself produce nothing.
    ///
    /// Unlike [`map`](Self::map), the result of `function` is not re-wrapped,
    /// so chained steps never nest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Maybe;
    ///
    /// fn half(value: i32) -> Maybe<i32> {
    ///     if value % 2 == 0 { Maybe::some(value / 2) } else { Maybe::none() }
    /// }
    ///
    /// assert_eq!(Maybe::some(8).bind(half).bind(half), Maybe::Some(2));
    /// assert_eq!(Maybe::some(6).bind(half).bind(half), Maybe::None);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the payload only if `predicate` holds.
    ///
    /// `predicate` is never called on `None`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => alternative(),
        }
    }

    /// Runs `action` on the payload if present and returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let value = Maybe::some(3).tee(|x| seen.push(*x));
    /// assert_eq!(value, Maybe::Some(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn tee<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Eliminates the `Maybe` by handling both cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Maybe;
    ///
    /// let describe = |value: Maybe<i32>| value.match_with(|x| format!("got {x}"), || "nothing".to_string());
    /// assert_eq!(describe(Maybe::some(1)), "got 1");
    /// assert_eq!(describe(Maybe::none()), "nothing");
    /// ```
    #[inline]
    pub fn match_with<U, F, G>(self, on_some: F, on_none: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Returns the payload, or `default` if absent.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the payload, or computes a default if absent.
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// Returns the payload, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics if this is `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", VariantError::new("Maybe", "unwrap", Variant::None)),
        }
    }

    /// Returns the payload, or a [`VariantError`] if absent.
    ///
    /// # Errors
    ///
    /// Returns an error naming the `None` variant when there is no payload.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, VariantError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(VariantError::new("Maybe", "try_unwrap", Variant::None)),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts to an `Either`, using `left` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::some(1).to_either("missing"), Either::Right(1));
    /// assert_eq!(Maybe::<i32>::none().to_either("missing"), Either::Left("missing"));
    /// ```
    #[inline]
    pub fn to_either<L>(self, left: L) -> Either<L, T> {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(left),
        }
    }

    /// Converts to an `Either`, computing the left value only when absent.
    #[inline]
    pub fn to_either_with<L, F>(self, left: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(left()),
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Lifts a standard `Option`; `None` becomes `Maybe::None`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}
