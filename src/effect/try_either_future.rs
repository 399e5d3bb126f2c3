//! `Either` combinators for fallible futures.
//!
//! `Either` carries expected outcomes. Faults raised by the asynchronous
//! machinery itself (timeouts, I/O errors, a panicked task) travel on the
//! `Err` side of the future's `Result` instead. [`TryEitherFutureExt`] works on
//! `Future<Output = Result<Either<L, R>, E>>`: every combinator runs only on
//! `Ok`, and an `Err` is passed through untouched, never turned into a
//! `Left`.

use std::future::Future;

use futures::TryFutureExt;
use futures::future::TryFuture;

use crate::control::Either;

/// Combinators for a fallible future that resolves to an `Either`.
///
/// # Examples
///
/// ```rust
/// use railcar::control::Either;
/// use railcar::effect::TryEitherFutureExt;
///
/// async fn fetch(id: u32) -> Result<Either<String, u32>, std::io::Error> {
///     if id == 0 {
///         Err(std::io::Error::other("connection reset"))
///     } else {
///         Ok(Either::right(id))
///     }
/// }
///
/// # futures::executor::block_on(async {
/// let ok = fetch(2).map_right_ok(|x| x * 10).await.unwrap();
/// assert_eq!(ok, Either::Right(20));
///
/// let fault = fetch(0).map_right_ok(|x| x * 10).await;
/// assert!(fault.is_err());
/// # });
/// ```
pub trait TryEitherFutureExt<L, R, E>:
    Future<Output = Result<Either<L, R>, E>> + TryFuture<Ok = Either<L, R>, Error = E> + Sized
{
    /// Maps the right value of a successful output.
    fn map_right_ok<T, F>(self, function: F) -> impl Future<Output = Result<Either<L, T>, E>>
    where
        F: FnOnce(R) -> T,
    {
        self.map_ok(move |either| either.map(function))
    }

    /// Maps the left value of a successful output.
    fn map_left_ok<T, F>(self, function: F) -> impl Future<Output = Result<Either<T, R>, E>>
    where
        F: FnOnce(L) -> T,
    {
        self.map_ok(move |either| either.map_left(function))
    }

    /// Chains a synchronous step on a successful output.
    fn bind_right_ok<T, F>(self, function: F) -> impl Future<Output = Result<Either<L, T>, E>>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.map_ok(move |either| either.bind(function))
    }

    /// Chains a fallible asynchronous step on a successful output.
    ///
    /// The step may fail on either channel: with a `Left` (expected outcome)
    /// or with an `Err` (fault).
    fn bind_right_try_async<T, F, Fut>(
        self,
        function: F,
    ) -> impl Future<Output = Result<Either<L, T>, E>>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Result<Either<L, T>, E>>,
    {
        self.and_then(move |either| async move {
            match either {
                Either::Left(value) => Ok(Either::Left(value)),
                Either::Right(value) => function(value).await,
            }
        })
    }

    /// Runs a side effect on the right value of a successful output.
    fn tee_right_ok<F>(self, action: F) -> impl Future<Output = Result<Either<L, R>, E>>
    where
        F: FnOnce(&R),
    {
        self.map_ok(move |either| either.tee(action))
    }

    /// Eliminates the `Either` of a successful output.
    fn match_either_ok<T, F, G>(
        self,
        on_left: F,
        on_right: G,
    ) -> impl Future<Output = Result<T, E>>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.map_ok(move |either| either.match_with(on_left, on_right))
    }
}

impl<L, R, E, Fut> TryEitherFutureExt<L, R, E> for Fut where
    Fut: Future<Output = Result<Either<L, R>, E>>
{
}
