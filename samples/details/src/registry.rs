//! Service registration.
//!
//! The registry is built with a chain of `tee_mut` steps. The details port
//! is assembled from the configured adapter, wrapped in validation and then
//! logging.

use futures::FutureExt;
use railcar::control::{Either, Maybe, Pipeline};

use crate::config::{AdapterKind, DetailsConfig};
use crate::details::{
    ApiDetailsAdapter, CatalogDetailsAdapter, DetailsError, DetailsFuture, DetailsPort,
    LoggingDetails, ValidatingDetails,
};

/// Registered services.
#[derive(Default)]
pub struct ServiceRegistry {
    registered: Vec<&'static str>,
    details: Maybe<Box<dyn DetailsPort>>,
}

impl ServiceRegistry {
    /// Registers every service the application needs.
    pub fn configure(config: &DetailsConfig) -> Self {
        Self::default()
            .tee_mut(|registry| registry.register("configuration"))
            .tee_mut(|registry| registry.register("telemetry"))
            .tee_mut(|registry| registry.register_details_port(config.adapter))
    }

    /// Records a service name, in registration order.
    pub fn register(&mut self, name: &'static str) {
        self.registered.push(name);
    }

    pub fn registered(&self) -> &[&'static str] {
        &self.registered
    }

    /// Installs the details port.
    pub fn provide_details(&mut self, port: Box<dyn DetailsPort>) {
        self.details = Maybe::some(port);
    }

    fn register_details_port(&mut self, adapter: AdapterKind) {
        let source: Box<dyn DetailsPort> = match adapter {
            AdapterKind::Api => {
                self.register("details-adapter-api");
                Box::new(ApiDetailsAdapter)
            }
            AdapterKind::Db => {
                self.register("details-repository");
                self.register("details-adapter-db");
                Box::new(CatalogDetailsAdapter::with_sample_data())
            }
        };

        source
            .pipe(ValidatingDetails::new)
            .tee(|_| self.register("details-validation"))
            .pipe(LoggingDetails::new)
            .tee(|_| self.register("details-logging"))
            .pipe(|port| self.provide_details(Box::new(port)));
    }

    /// Looks up product details through the registered port.
    ///
    /// Resolves to `Left(DetailsError::Unavailable)` when no port has been
    /// provided.
    pub fn lookup<'a>(&'a self, name: &'a str) -> DetailsFuture<'a> {
        self.details.as_ref().match_with(
            |port| port.details(name),
            || {
                async {
                    Either::left(DetailsError::Unavailable(
                        "no details port registered".to_string(),
                    ))
                }
                .boxed_local()
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::ProductDetails;
    use rstest::rstest;

    fn config_with(adapter: AdapterKind) -> DetailsConfig {
        DetailsConfig {
            adapter,
            ..DetailsConfig::default()
        }
    }

    #[rstest]
    #[case(AdapterKind::Api, vec![
        "configuration",
        "telemetry",
        "details-adapter-api",
        "details-validation",
        "details-logging",
    ])]
    #[case(AdapterKind::Db, vec![
        "configuration",
        "telemetry",
        "details-repository",
        "details-adapter-db",
        "details-validation",
        "details-logging",
    ])]
    fn registration_order_follows_adapter(
        #[case] adapter: AdapterKind,
        #[case] expected: Vec<&'static str>,
    ) {
        let registry = ServiceRegistry::configure(&config_with(adapter));
        assert_eq!(registry.registered(), expected.as_slice());
    }

    #[rstest]
    #[tokio::test]
    async fn empty_registry_is_unavailable() {
        let registry = ServiceRegistry::default();
        assert!(matches!(
            registry.lookup("widget").await,
            Either::Left(DetailsError::Unavailable(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn db_adapter_serves_catalog_products() {
        let registry = ServiceRegistry::configure(&config_with(AdapterKind::Db));
        let result = registry.lookup("widget").await;
        assert_eq!(result.map(|details| details.price_cents), Either::Right(1_250));
    }

    #[rstest]
    #[tokio::test]
    async fn provided_port_replaces_configured_one() {
        let mut registry = ServiceRegistry::configure(&config_with(AdapterKind::Api));
        registry.provide_details(Box::new(CatalogDetailsAdapter::new([ProductDetails::new(
            "bolt", "M6", 5,
        )])));
        let result = registry.lookup("bolt").await;
        assert_eq!(result, Either::Right(ProductDetails::new("bolt", "M6", 5)));
    }
}
