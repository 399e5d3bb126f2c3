//! Product details port, its adapters and its decorators.
//!
//! ```text
//! LoggingDetails -> ValidatingDetails -> ApiDetailsAdapter | CatalogDetailsAdapter
//! ```
//!
//! Every layer returns `Either<DetailsError, ProductDetails>`: a failed
//! lookup is an ordinary `Left` that flows back through the decorators, not
//! a panic or an `Err`.

use std::collections::HashMap;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use railcar::control::{Either, Maybe};
use railcar::effect::EitherFutureExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest product name accepted by [`ValidatingDetails`].
pub const MAX_NAME_LENGTH: usize = 64;

/// Details of a single product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub name: String,
    pub description: String,
    pub price_cents: u64,
}

impl ProductDetails {
    #[must_use]
    pub fn new(name: &str, description: &str, price_cents: u64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price_cents,
        }
    }
}

/// Expected ways a details lookup can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailsError {
    #[error("product not found: {0}")]
    NotFound(String),
    #[error("invalid product name: {0:?}")]
    Invalid(String),
    #[error("details source unavailable: {0}")]
    Unavailable(String),
}

/// Pending result of a details lookup.
pub type DetailsFuture<'a> = LocalBoxFuture<'a, Either<DetailsError, ProductDetails>>;

/// Driven port for fetching product details.
pub trait DetailsPort {
    /// Looks up the details of the named product.
    fn details<'a>(&'a self, name: &'a str) -> DetailsFuture<'a>;
}

impl<P> DetailsPort for Box<P>
where
    P: DetailsPort + ?Sized,
{
    fn details<'a>(&'a self, name: &'a str) -> DetailsFuture<'a> {
        (**self).details(name)
    }
}

// =============================================================================
// Adapters
// =============================================================================

/// Adapter for the remote product details API.
///
/// The remote call is stubbed: every lookup succeeds with empty details for
/// the requested name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiDetailsAdapter;

impl DetailsPort for ApiDetailsAdapter {
    fn details<'a>(&'a self, name: &'a str) -> DetailsFuture<'a> {
        async move { Either::right(ProductDetails::new(name, "", 0)) }.boxed_local()
    }
}

/// Adapter backed by an in-memory product catalog.
#[derive(Debug, Clone)]
pub struct CatalogDetailsAdapter {
    store: Maybe<HashMap<String, ProductDetails>>,
}

impl CatalogDetailsAdapter {
    /// Creates an adapter over the given products, keyed by name.
    pub fn new<I>(products: I) -> Self
    where
        I: IntoIterator<Item = ProductDetails>,
    {
        let store = products
            .into_iter()
            .map(|product| (product.name.clone(), product))
            .collect();
        Self {
            store: Maybe::some(store),
        }
    }

    /// Creates an adapter whose store cannot be reached.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            store: Maybe::none(),
        }
    }

    /// A small catalog used by the binary.
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self::new([
            ProductDetails::new("widget", "A general purpose widget", 1_250),
            ProductDetails::new("gadget", "A gadget with a single button", 4_999),
            ProductDetails::new("gizmo", "An unexplained gizmo", 99),
        ])
    }

    /// Finds a product in the catalog.
    ///
    /// Absent when the store is offline or the product is unknown.
    pub fn find(&self, name: &str) -> Maybe<ProductDetails> {
        self.store
            .as_ref()
            .bind(|store| Maybe::from(store.get(name).cloned()))
    }
}

impl DetailsPort for CatalogDetailsAdapter {
    fn details<'a>(&'a self, name: &'a str) -> DetailsFuture<'a> {
        async move {
            self.store
                .as_ref()
                .to_either_with(|| DetailsError::Unavailable("catalog is offline".to_string()))
                .bind(|store| {
                    Maybe::from(store.get(name).cloned())
                        .to_either_with(|| DetailsError::NotFound(name.to_string()))
                })
        }
        .boxed_local()
    }
}

// =============================================================================
// Decorators
// =============================================================================

/// Rejects blank or overlong names before they reach the inner port.
#[derive(Debug, Clone)]
pub struct ValidatingDetails<P> {
    inner: P,
}

impl<P> ValidatingDetails<P> {
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }
}

/// Trims `name`, rejecting it when nothing is left or it is too long.
pub fn validate_name(name: &str) -> Either<DetailsError, &str> {
    Maybe::some(name.trim())
        .filter(|trimmed| !trimmed.is_empty() && trimmed.chars().count() <= MAX_NAME_LENGTH)
        .to_either_with(|| DetailsError::Invalid(name.to_string()))
}

impl<P> DetailsPort for ValidatingDetails<P>
where
    P: DetailsPort,
{
    fn details<'a>(&'a self, name: &'a str) -> DetailsFuture<'a> {
        validate_name(name)
            .bind_async(|valid| self.inner.details(valid))
            .boxed_local()
    }
}

/// Logs the outcome of every lookup and passes it on unchanged.
#[derive(Debug, Clone)]
pub struct LoggingDetails<P> {
    inner: P,
}

impl<P> LoggingDetails<P> {
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P> DetailsPort for LoggingDetails<P>
where
    P: DetailsPort,
{
    fn details<'a>(&'a self, name: &'a str) -> DetailsFuture<'a> {
        tracing::debug!(product = name, "looking up product details");

        self.inner
            .details(name)
            .tee_right(move |details| {
                tracing::info!(
                    product = name,
                    price_cents = details.price_cents,
                    "product details found"
                );
            })
            .tee_left(move |error| match error {
                DetailsError::Unavailable(_) => {
                    tracing::error!(product = name, %error, "product details lookup failed");
                }
                DetailsError::NotFound(_) | DetailsError::Invalid(_) => {
                    tracing::warn!(product = name, %error, "product details lookup rejected");
                }
            })
            .boxed_local()
    }
}
