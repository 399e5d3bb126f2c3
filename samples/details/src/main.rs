//! Product Details Sample Application Entry Point
//!
//! Usage: `details [PRODUCT]...` (defaults to `widget`)

use std::process::ExitCode;

use details_sample::config::DetailsConfig;
use details_sample::registry::ServiceRegistry;
use details_sample::{lookup_all, telemetry};
use railcar::control::Either;
use tracing::Instrument;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match DetailsConfig::from_env() {
        Either::Right(config) => config,
        Either::Left(error) => {
            eprintln!("Failed to load configuration: {error}");
            return ExitCode::FAILURE;
        }
    };

    let span = match telemetry::init(&config.telemetry) {
        Either::Right(span) => span,
        Either::Left(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    run(config).instrument(span).await
}

async fn run(config: DetailsConfig) -> ExitCode {
    tracing::info!(adapter = %config.adapter, "Starting Product Details Sample Application...");

    let registry = ServiceRegistry::configure(&config);
    tracing::debug!(services = ?registry.registered(), "services registered");

    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        names.push("widget".to_string());
    }

    let results = lookup_all(&registry, &names).await;
    let mut failures = 0_usize;
    for (name, result) in names.iter().zip(results) {
        let line = result
            .map(|details| {
                serde_json::to_string(&details).unwrap_or_else(|_| format!("{details:?}"))
            })
            .tee_left(|_| failures += 1)
            .match_with(|error| format!("{name}: {error}"), |json| json);
        println!("{line}");
    }

    tracing::info!(failures, "Product Details Sample Application finished");
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
