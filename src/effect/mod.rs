//! Asynchronous combinators for `Maybe` and `Either`.
//!
//! The combinators here perform no scheduling of their own. Each one awaits
//! its input once, dispatches on the variant exactly like the synchronous
//! combinator of the same name, and returns a new future, so ordering along a
//! chain is strictly sequential.
//!
//! - Inherent `map_async`, `bind_async`, `tee_async`, `match_async` on
//!   [`Maybe`](crate::control::Maybe) and [`Either`](crate::control::Either)
//! - [`EitherFutureExt`]: combinators on a pending `Either`
//! - [`MaybeFutureExt`]: combinators on a pending `Maybe`
//! - [`TryEitherFutureExt`]: combinators on a pending
//!   `Result<Either<L, R>, E>`, where `Err` is a fault and never a `Left`
//!
//! # Cancellation
//!
//! A future is cancelled by dropping it. Every combinator owns its input
//! future, so dropping the combined future drops the input as well and the
//! continuation never runs.
//!
//! # Examples
//!
//! ```rust
//! use railcar::control::Either;
//! use railcar::effect::EitherFutureExt;
//!
//! # futures::executor::block_on(async {
//! let result = async { Either::<String, i32>::right(4) }
//!     .map_right(|x| x * 2)
//!     .bind_right(|x| if x > 5 { Either::right(x) } else { Either::left("too small".to_string()) })
//!     .match_either(|_| -1, |x| x)
//!     .await;
//! assert_eq!(result, 8);
//! # });
//! ```

mod either_future;
mod maybe_future;
mod try_either_future;

pub use either_future::EitherFutureExt;
pub use maybe_future::MaybeFutureExt;
pub use try_either_future::TryEitherFutureExt;
