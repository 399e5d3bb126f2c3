//! Asynchronous combinators for `Maybe`.
//!
//! Mirrors the `Either` combinators: inherent `*_async` methods for an
//! asynchronous continuation on a `Maybe` value, and [`MaybeFutureExt`] for a
//! pending future that resolves to a `Maybe`.

use std::future::Future;

use crate::control::{Either, Maybe};

impl<T> Maybe<T> {
    /// Applies an asynchronous function to the payload if present.
    pub async fn map_async<U, F, Fut>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value).await),
            Self::None => Maybe::None,
        }
    }

    /// Chains an asynchronous step that may produce nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Maybe;
    ///
    /// # futures::executor::block_on(async {
    /// let found = Maybe::some(2)
    ///     .bind_async(|id| async move { if id == 2 { Maybe::some("two") } else { Maybe::none() } })
    ///     .await;
    /// assert_eq!(found, Maybe::Some("two"));
    /// # });
    /// ```
    pub async fn bind_async<U, F, Fut>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Self::Some(value) => function(value).await,
            Self::None => Maybe::None,
        }
    }

    /// Awaits an asynchronous side effect on the payload, then returns `self`.
    pub async fn tee_async<F>(self, action: F) -> Self
    where
        F: AsyncFnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value).await;
        }
        self
    }

    /// Eliminates the `Maybe` with asynchronous handlers for both cases.
    pub async fn match_async<U, F, G, FutS, FutN>(self, on_some: F, on_none: G) -> U
    where
        F: FnOnce(T) -> FutS,
        G: FnOnce() -> FutN,
        FutS: Future<Output = U>,
        FutN: Future<Output = U>,
    {
        match self {
            Self::Some(value) => on_some(value).await,
            Self::None => on_none().await,
        }
    }
}

/// Combinators for a pending future that resolves to a `Maybe`.
///
/// Implemented for every `Future<Output = Maybe<T>>`.
///
/// # Examples
///
/// ```rust
/// use railcar::control::Maybe;
/// use railcar::effect::MaybeFutureExt;
///
/// async fn find(name: &str) -> Maybe<usize> {
///     if name.is_empty() { Maybe::none() } else { Maybe::some(name.len()) }
/// }
///
/// # futures::executor::block_on(async {
/// let length = find("railcar")
///     .filter_some(|len| *len > 3)
///     .map_some(|len| len * 2)
///     .match_maybe(|len| len, || 0)
///     .await;
/// assert_eq!(length, 14);
/// # });
/// ```
pub trait MaybeFutureExt<T>: Future<Output = Maybe<T>> + Sized {
    /// Maps the payload once the input resolves.
    fn map_some<U, F>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(function) }
    }

    /// Chains a synchronous step once the input resolves.
    fn bind_some<U, F>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        async move { self.await.bind(function) }
    }

    /// Filters the payload once the input resolves.
    fn filter_some<P>(self, predicate: P) -> impl Future<Output = Maybe<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.filter(predicate) }
    }

    /// Runs a side effect on the payload once the input resolves.
    fn tee_some<F>(self, action: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.tee(action) }
    }

    /// Eliminates the `Maybe` once the input resolves.
    fn match_maybe<U, F, G>(self, on_some: F, on_none: G) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        async move { self.await.match_with(on_some, on_none) }
    }

    /// Converts to an `Either` once the input resolves.
    fn to_either_with<L, F>(self, left: F) -> impl Future<Output = Either<L, T>>
    where
        F: FnOnce() -> L,
    {
        async move { self.await.to_either_with(left) }
    }

    /// Maps the payload with an asynchronous function.
    fn map_some_async<U, F, Fut>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(function).await }
    }

    /// Chains an asynchronous step that may produce nothing.
    fn bind_some_async<U, F, Fut>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        async move { self.await.bind_async(function).await }
    }

    /// Awaits an asynchronous side effect on the payload.
    fn tee_some_async<F>(self, action: F) -> impl Future<Output = Maybe<T>>
    where
        F: AsyncFnOnce(&T),
    {
        async move { self.await.tee_async(action).await }
    }

    /// Eliminates the `Maybe` with asynchronous handlers.
    fn match_maybe_async<U, F, G, FutS, FutN>(
        self,
        on_some: F,
        on_none: G,
    ) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> FutS,
        G: FnOnce() -> FutN,
        FutS: Future<Output = U>,
        FutN: Future<Output = U>,
    {
        async move { self.await.match_async(on_some, on_none).await }
    }
}

impl<T, Fut> MaybeFutureExt<T> for Fut where Fut: Future<Output = Maybe<T>> {}
