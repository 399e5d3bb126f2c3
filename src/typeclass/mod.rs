//! Type class traits for the containers.
//!
//! - [`TypeConstructor`]: Emulates higher-kinded types with a GAT
//! - [`Functor`]: Mapping over the payload
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing dependent computations
//!
//! All of them are implemented for [`Maybe`](crate::control::Maybe) and
//! [`Either`](crate::control::Either) (right-biased), so generic code can
//! rely on the functor and monad laws without knowing which container it is
//! working with.
//!
//! # Examples
//!
//! ```rust
//! use railcar::control::{Either, Maybe};
//! use railcar::typeclass::{Functor, Monad};
//!
//! fn increment_all<M>(value: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     value.fmap(|x| x + 1)
//! }
//!
//! assert_eq!(increment_all(Maybe::some(1)), Maybe::Some(2));
//! assert_eq!(increment_all(Either::<&str, i32>::Right(1)), Either::Right(2));
//! assert_eq!(Maybe::some(1).flat_map(|x| Maybe::some(x * 10)), Maybe::Some(10));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
