//! Tracing subscriber setup.

use railcar::control::{Either, Pipeline};
use thiserror::Error;
use tracing::Span;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TelemetryConfig;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to install the tracing subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Builds the level filter.
///
/// `RUST_LOG` directives, when present, refine the configured level.
pub fn filter(config: &TelemetryConfig) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level).into())
        .from_env_lossy()
}

/// Creates the span that carries the deployment fields.
pub fn root_span(config: &TelemetryConfig) -> Span {
    tracing::info_span!(
        "details",
        environment = %config.environment,
        system = %config.system,
        customer = %config.customer,
    )
}

/// Installs the global subscriber and returns the root span.
///
/// # Errors
///
/// Returns `Left(TelemetryError::Install)` if a global subscriber is already
/// installed.
pub fn init(config: &TelemetryConfig) -> Either<TelemetryError, Span> {
    filter(config)
        .pipe(|filter| {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .try_init()
        })
        .pipe(Either::from)
        .map_left(TelemetryError::from)
        .map(|()| root_span(config))
}
