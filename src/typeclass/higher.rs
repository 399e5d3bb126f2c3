//! Higher-kinded type emulation.
//!
//! Rust has no native higher-kinded types, so the type classes in this
//! module are expressed over [`TypeConstructor`], which uses a generic
//! associated type to name "the same container holding a different type".
//!
//! # Examples
//!
//! ```rust
//! use railcar::control::Maybe;
//! use railcar::typeclass::TypeConstructor;
//!
//! fn assert_with_type<T>()
//! where
//!     T: TypeConstructor<Inner = i32, WithType<String> = Maybe<String>>,
//! {
//! }
//!
//! assert_with_type::<Maybe<i32>>();
//! ```

use crate::control::{Either, Maybe};

/// A type that is parameterised over a single "payload" type.
///
/// * `Inner` - the payload type currently held
/// * `WithType<B>` - the same container with the payload replaced by `B`
pub trait TypeConstructor {
    /// The payload type.
    type Inner;

    /// The same container holding `B` instead of `Inner`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

/// `Either` is right-biased: the payload is the `Right` type and the `Left`
/// type is carried along unchanged.
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}
