//! Containers and pipeline combinators.
//!
//! This module provides the core algebra:
//!
//! - [`Unit`]: The zero-information value
//! - [`Maybe`]: A value that may be absent
//! - [`Either`]: A value that is a `Left` (error) or a `Right` (success)
//! - [`Pipeline`]: `pipe`/`tee` for any value
//! - [`VariantError`]: Raised when reading the wrong variant
//!
//! # Examples
//!
//! ## Railway-Oriented Composition
//!
//! ```rust
//! use railcar::control::{Either, Maybe};
//!
//! fn lookup(id: u32) -> Maybe<&'static str> {
//!     if id == 1 { Maybe::some("widget") } else { Maybe::none() }
//! }
//!
//! let found = lookup(1)
//!     .to_either_with(|| "not found")
//!     .map(str::len)
//!     .match_with(|_| 0, |len| len);
//! assert_eq!(found, 6);
//!
//! let missing: Either<&str, usize> = lookup(2).to_either("not found").map(str::len);
//! assert_eq!(missing, Either::Left("not found"));
//! ```

mod either;
mod error;
mod maybe;
mod pipeline;
mod unit;

pub use either::Either;
pub use error::{Variant, VariantError};
pub use maybe::Maybe;
pub use pipeline::Pipeline;
pub use unit::Unit;
