//! Application configuration.
//!
//! Configuration is read once at startup from environment variables,
//! optionally loaded from a `.env` file. Reading goes through a lookup
//! function so that the parsing rules can be exercised without touching the
//! process environment.
//!
//! # Environment Variables
//!
//! - `DETAILS_ADAPTER`: `api` or `db` (optional, default: `api`)
//! - `LOG_LEVEL`: `trace`..`error` (optional, falls back to `debug`)
//! - `DETAILS_ENVIRONMENT`: deployment environment (optional)
//! - `DETAILS_SYSTEM`: system name attached to every log line (optional)
//! - `DETAILS_CUSTOMER`: customer name attached to every log line (optional)

use std::env;
use std::fmt;
use std::str::FromStr;

use railcar::control::{Either, Maybe};
use thiserror::Error;
use tracing::Level;

pub const ADAPTER_KEY: &str = "DETAILS_ADAPTER";
pub const LOG_LEVEL_KEY: &str = "LOG_LEVEL";
pub const ENVIRONMENT_KEY: &str = "DETAILS_ENVIRONMENT";
pub const SYSTEM_KEY: &str = "DETAILS_SYSTEM";
pub const CUSTOMER_KEY: &str = "DETAILS_CUSTOMER";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `DETAILS_ADAPTER` names an adapter that does not exist.
    #[error("Invalid value for DETAILS_ADAPTER: unknown adapter `{0}` (expected `api` or `db`)")]
    UnknownAdapter(String),
}

/// Which adapter serves the details port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdapterKind {
    /// Remote product details API.
    #[default]
    Api,
    /// Local product catalog.
    Db,
}

impl FromStr for AdapterKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "api" => Ok(Self::Api),
            "db" => Ok(Self::Db),
            _ => Err(ConfigError::UnknownAdapter(value.to_string())),
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api => write!(formatter, "api"),
            Self::Db => write!(formatter, "db"),
        }
    }
}

/// Logging configuration.
///
/// `environment`, `system` and `customer` are recorded on the root span, so
/// every event logged inside it carries them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub level: Level,
    pub environment: String,
    pub system: String,
    pub customer: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            environment: "development".to_string(),
            system: "details".to_string(),
            customer: "unknown".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsConfig {
    pub adapter: AdapterKind,
    pub telemetry: TelemetryConfig,
}

impl DetailsConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `Left(ConfigError::UnknownAdapter)` if `DETAILS_ADAPTER` is set
    /// to anything other than `api` or `db`.
    pub fn from_env() -> Either<ConfigError, Self> {
        // A missing .env file is not an error
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| Maybe::from(env::var(key).ok()))
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Unset keys take their defaults. An unparsable `LOG_LEVEL` falls back
    /// to `debug` rather than failing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use details_sample::config::{AdapterKind, DetailsConfig};
    /// use railcar::control::{Either, Maybe};
    ///
    /// let config = DetailsConfig::from_lookup(|key| match key {
    ///     "DETAILS_ADAPTER" => Maybe::some("db".to_string()),
    ///     _ => Maybe::none(),
    /// });
    /// assert!(matches!(config, Either::Right(DetailsConfig { adapter: AdapterKind::Db, .. })));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Either<ConfigError, Self>
    where
        F: Fn(&str) -> Maybe<String>,
    {
        let defaults = TelemetryConfig::default();
        let telemetry = TelemetryConfig {
            level: lookup(LOG_LEVEL_KEY)
                .bind(|raw| Maybe::from(raw.trim().parse::<Level>().ok()))
                .get_or_else(defaults.level),
            environment: lookup(ENVIRONMENT_KEY).get_or_else(defaults.environment),
            system: lookup(SYSTEM_KEY).get_or_else(defaults.system),
            customer: lookup(CUSTOMER_KEY).get_or_else(defaults.customer),
        };

        lookup(ADAPTER_KEY)
            .match_with(
                |raw| Either::from(raw.parse::<AdapterKind>()),
                || Either::right(AdapterKind::default()),
            )
            .map(|adapter| Self { adapter, telemetry })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_in(values: &[(&str, &str)]) -> impl Fn(&str) -> Maybe<String> {
        let values: HashMap<String, String> = values
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| Maybe::from(values.get(key).cloned())
    }

    // =========================================================================
    // AdapterKind Tests
    // =========================================================================

    #[rstest]
    #[case("api", AdapterKind::Api)]
    #[case("db", AdapterKind::Db)]
    #[case(" DB ", AdapterKind::Db)]
    fn adapter_kind_parses(#[case] raw: &str, #[case] expected: AdapterKind) {
        assert_eq!(raw.parse::<AdapterKind>(), Ok(expected));
    }

    #[rstest]
    fn adapter_kind_rejects_unknown() {
        assert_eq!(
            "ftp".parse::<AdapterKind>(),
            Err(ConfigError::UnknownAdapter("ftp".to_string()))
        );
    }

    #[rstest]
    fn config_error_display_names_the_key() {
        let error = ConfigError::UnknownAdapter("ftp".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid value for DETAILS_ADAPTER: unknown adapter `ftp` (expected `api` or `db`)"
        );
    }

    // =========================================================================
    // DetailsConfig::from_lookup Tests
    // =========================================================================

    #[rstest]
    fn empty_environment_uses_defaults() {
        let config = DetailsConfig::from_lookup(lookup_in(&[]));
        assert_eq!(config, Either::Right(DetailsConfig::default()));
    }

    #[rstest]
    fn all_values_are_read() {
        let config = DetailsConfig::from_lookup(lookup_in(&[
            (ADAPTER_KEY, "db"),
            (LOG_LEVEL_KEY, "warn"),
            (ENVIRONMENT_KEY, "production"),
            (SYSTEM_KEY, "catalog"),
            (CUSTOMER_KEY, "acme"),
        ]))
        .unwrap_right();

        assert_eq!(config.adapter, AdapterKind::Db);
        assert_eq!(config.telemetry.level, Level::WARN);
        assert_eq!(config.telemetry.environment, "production");
        assert_eq!(config.telemetry.system, "catalog");
        assert_eq!(config.telemetry.customer, "acme");
    }

    #[rstest]
    #[case("verbose")]
    #[case("")]
    fn unparsable_log_level_falls_back_to_debug(#[case] raw: &str) {
        let config = DetailsConfig::from_lookup(lookup_in(&[(LOG_LEVEL_KEY, raw)])).unwrap_right();
        assert_eq!(config.telemetry.level, Level::DEBUG);
    }

    #[rstest]
    fn unknown_adapter_is_an_error() {
        let config = DetailsConfig::from_lookup(lookup_in(&[(ADAPTER_KEY, "ftp")]));
        assert_eq!(
            config,
            Either::Left(ConfigError::UnknownAdapter("ftp".to_string()))
        );
    }
}
