//! The contract a metrics host calls into, and its SQL-backed implementation.

use async_trait::async_trait;
use tracing::instrument::WithSubscriber;
use tracing::Dispatch;

use pg_query_metrics_configuration::{Configuration, MetricKeyPrefix, QueryDefinition};
use query_engine_execution::{collect, Connect, Error, MetricSnapshot};
use query_engine_metadata::metadata::{build_graph_definitions, GraphDefinitions};

/// What a monitoring host needs from a metrics source.
#[async_trait]
pub trait MetricsPlugin {
    /// Prefix of every emitted metric and graph name. Never empty.
    fn metric_key_prefix(&self) -> &str;

    /// Run one collection cycle.
    async fn fetch_metrics(&self) -> Result<MetricSnapshot, Error>;

    /// Graph metadata of the configured metrics. Does not touch the database.
    fn graph_definitions(&self) -> GraphDefinitions;
}

/// Exposes a fixed set of query definitions as a [`MetricsPlugin`].
///
/// Everything logged while fetching goes to the injected `dispatch`, not to the global
/// subscriber.
pub struct QueryMetricsPlugin<D> {
    prefix: MetricKeyPrefix,
    queries: Vec<QueryDefinition>,
    connector: D,
    dispatch: Dispatch,
}

impl<D: Connect> QueryMetricsPlugin<D> {
    pub fn new(
        prefix: MetricKeyPrefix,
        queries: Vec<QueryDefinition>,
        connector: D,
        dispatch: Dispatch,
    ) -> Self {
        Self {
            prefix,
            queries,
            connector,
            dispatch,
        }
    }

    /// A plugin for `configuration`. Its connection settings are expected to be baked into
    /// `connector` already.
    pub fn from_configuration(
        configuration: Configuration,
        connector: D,
        dispatch: Dispatch,
    ) -> Self {
        Self::new(
            configuration.metric_key_prefix,
            configuration.queries,
            connector,
            dispatch,
        )
    }
}

#[async_trait]
impl<D: Connect> MetricsPlugin for QueryMetricsPlugin<D> {
    fn metric_key_prefix(&self) -> &str {
        self.prefix.as_str()
    }

    async fn fetch_metrics(&self) -> Result<MetricSnapshot, Error> {
        collect(&self.connector, &self.queries)
            .with_subscriber(self.dispatch.clone())
            .await
    }

    fn graph_definitions(&self) -> GraphDefinitions {
        build_graph_definitions(&self.queries)
    }
}
