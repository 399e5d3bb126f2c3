//! Asynchronous combinators for `Either`.
//!
//! Two shapes are covered:
//!
//! - An `Either` value whose continuation is asynchronous: the inherent
//!   [`Either::map_async`], [`Either::bind_async`], [`Either::tee_async`]
//!   and [`Either::match_async`].
//! - A pending future that resolves to an `Either`: [`EitherFutureExt`],
//!   with synchronous (`map_right`, ...) and asynchronous
//!   (`map_right_async`, ...) continuations.
//!
//! Every combinator awaits its input once, dispatches on the variant exactly
//! like its synchronous counterpart, and yields a new future. Nothing runs
//! until the returned future is polled, and a future dropped before its
//! input resolves never runs its continuation.

use std::future::Future;

use crate::control::Either;

impl<L, R> Either<L, R> {
    /// Applies an asynchronous function to the right value.
    ///
    /// `Left` resolves immediately, without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// # futures::executor::block_on(async {
    /// let value: Either<String, i32> = Either::Right(21);
    /// let doubled = value.map_async(|x| async move { x * 2 }).await;
    /// assert_eq!(doubled, Either::Right(42));
    /// # });
    /// ```
    pub async fn map_async<T, F, Fut>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value).await),
        }
    }

    /// Chains an asynchronous step that may fail.
    ///
    /// `Left` short-circuits: `function` is never invoked.
    pub async fn bind_async<T, F, Fut>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Either<L, T>>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value).await,
        }
    }

    /// Awaits an asynchronous side effect on the right value, then returns
    /// `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// # futures::executor::block_on(async {
    /// let mut seen = Vec::new();
    /// let value: Either<&str, i32> = Either::Right(3);
    /// let value = value.tee_async(async |x: &i32| seen.push(*x)).await;
    /// assert_eq!(value, Either::Right(3));
    /// assert_eq!(seen, vec![3]);
    /// # });
    /// ```
    pub async fn tee_async<F>(self, action: F) -> Self
    where
        F: AsyncFnOnce(&R),
    {
        if let Self::Right(value) = &self {
            action(value).await;
        }
        self
    }

    /// Eliminates the `Either` with asynchronous handlers for both sides.
    pub async fn match_async<T, F, G, FutL, FutR>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> FutL,
        G: FnOnce(R) -> FutR,
        FutL: Future<Output = T>,
        FutR: Future<Output = T>,
    {
        match self {
            Self::Left(value) => on_left(value).await,
            Self::Right(value) => on_right(value).await,
        }
    }
}

/// Combinators for a pending future that resolves to an `Either`.
///
/// Implemented for every `Future<Output = Either<L, R>>`.
///
/// # Examples
///
/// ```rust
/// use railcar::control::Either;
/// use railcar::effect::EitherFutureExt;
///
/// async fn lookup(id: u32) -> Either<String, u32> {
///     if id > 0 { Either::right(id * 10) } else { Either::left("invalid id".to_string()) }
/// }
///
/// # futures::executor::block_on(async {
/// let total = lookup(4)
///     .map_right(|x| x + 2)
///     .bind_right_async(|x| async move { Either::right(x * 2) })
///     .match_either(|_| 0, |x| x)
///     .await;
/// assert_eq!(total, 84);
/// # });
/// ```
pub trait EitherFutureExt<L, R>: Future<Output = Either<L, R>> + Sized {
    /// Maps the right value once the input resolves.
    fn map_right<T, F>(self, function: F) -> impl Future<Output = Either<L, T>>
    where
        F: FnOnce(R) -> T,
    {
        async move { self.await.map(function) }
    }

    /// Maps the left value once the input resolves.
    fn map_left<T, F>(self, function: F) -> impl Future<Output = Either<T, R>>
    where
        F: FnOnce(L) -> T,
    {
        async move { self.await.map_left(function) }
    }

    /// Chains a synchronous step once the input resolves.
    fn bind_right<T, F>(self, function: F) -> impl Future<Output = Either<L, T>>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        async move { self.await.bind(function) }
    }

    /// Runs a side effect on the right value once the input resolves.
    fn tee_right<F>(self, action: F) -> impl Future<Output = Either<L, R>>
    where
        F: FnOnce(&R),
    {
        async move { self.await.tee(action) }
    }

    /// Runs a side effect on the left value once the input resolves.
    fn tee_left<F>(self, action: F) -> impl Future<Output = Either<L, R>>
    where
        F: FnOnce(&L),
    {
        async move { self.await.tee_left(action) }
    }

    /// Eliminates the `Either` once the input resolves.
    fn match_either<T, F, G>(self, on_left: F, on_right: G) -> impl Future<Output = T>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        async move { self.await.match_with(on_left, on_right) }
    }

    /// Maps the right value with an asynchronous function.
    fn map_right_async<T, F, Fut>(self, function: F) -> impl Future<Output = Either<L, T>>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.map_async(function).await }
    }

    /// Chains an asynchronous step that may fail.
    fn bind_right_async<T, F, Fut>(self, function: F) -> impl Future<Output = Either<L, T>>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Either<L, T>>,
    {
        async move { self.await.bind_async(function).await }
    }

    /// Awaits an asynchronous side effect on the right value.
    fn tee_right_async<F>(self, action: F) -> impl Future<Output = Either<L, R>>
    where
        F: AsyncFnOnce(&R),
    {
        async move { self.await.tee_async(action).await }
    }

    /// Eliminates the `Either` with asynchronous handlers.
    fn match_either_async<T, F, G, FutL, FutR>(
        self,
        on_left: F,
        on_right: G,
    ) -> impl Future<Output = T>
    where
        F: FnOnce(L) -> FutL,
        G: FnOnce(R) -> FutR,
        FutL: Future<Output = T>,
        FutR: Future<Output = T>,
    {
        async move { self.await.match_async(on_left, on_right).await }
    }
}

impl<L, R, Fut> EitherFutureExt<L, R> for Fut where Fut: Future<Output = Either<L, R>> {}
