//! Product Details Sample Application
//!
//! Looks up product details through a port whose adapter is chosen from
//! configuration, wrapped in validation and logging decorators.
//!
//! # railcar Features Used
//!
//! - `Either` for expected lookup failures
//! - `Maybe` for catalog lookups, converted with `to_either_with`
//! - `Pipeline::tee_mut` chains for service registration
//! - `EitherFutureExt` to log outcomes without breaking the chain

pub mod config;
pub mod details;
pub mod registry;
pub mod telemetry;

use railcar::control::Either;

use crate::details::{DetailsError, ProductDetails};
use crate::registry::ServiceRegistry;

/// Looks up every name in order, one at a time.
pub async fn lookup_all(
    registry: &ServiceRegistry,
    names: &[String],
) -> Vec<Either<DetailsError, ProductDetails>> {
    let mut results = Vec::with_capacity(names.len());
    for name in names {
        results.push(registry.lookup(name).await);
    }
    results
}
