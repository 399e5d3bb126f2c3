//! # railcar
//!
//! Optional and two-sided containers with law-abiding combinators, for
//! composing computations in a pipeline style without explicit branching.
//!
//! ## Overview
//!
//! - **Containers**: [`Maybe`](control::Maybe) for presence/absence,
//!   [`Either`](control::Either) for error/success, [`Unit`](control::Unit)
//!   for "no value"
//! - **Pipelines**: `map`, `bind`, `filter`, `tee`, `match_with` on the
//!   containers, plus [`Pipeline`](control::Pipeline) for any value
//! - **Sequences**: `map`, `filter`, `for_each`, `fold`, `reduce` over any
//!   iterable (see [`sequence`])
//! - **Type Classes**: Functor, Applicative, Monad for both containers
//! - **Async**: the same combinators over pending futures
//!
//! ## Feature Flags
//!
//! - `typeclass`: Functor/Applicative/Monad traits
//! - `async`: combinators over futures
//! - `serde`: `Serialize`/`Deserialize` for the containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use railcar::prelude::*;
//!
//! let result = Either::<String, i32>::right(4)
//!     .map(|x| x * 2)
//!     .bind(|x| {
//!         if x > 5 {
//!             Either::right(x)
//!         } else {
//!             Either::left("too small".to_string())
//!         }
//!     })
//!     .match_with(|_| -1, |x| x);
//! assert_eq!(result, 8);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railcar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;

    pub use crate::sequence;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "async")]
    pub use crate::effect::*;
}

pub mod control;

pub mod sequence;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "async")]
pub mod effect;
