//! Run a whole configuration and merge the results into one snapshot.

use std::collections::BTreeMap;

use tracing::{info_span, Instrument};

use pg_query_metrics_configuration::QueryDefinition;

use crate::connection::{Connect, Connection};
use crate::error::Error;
use crate::query;

/// The value one query definition produced.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricValue {
    pub metric_name: String,
    pub value: f64,
}

/// Metric name to value, for one collection cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSnapshot(BTreeMap<String, f64>);

impl MetricSnapshot {
    pub fn new() -> Self {
        MetricSnapshot(BTreeMap::new())
    }

    /// Add a value, replacing any earlier value with the same metric name.
    pub fn merge(&mut self, metric: MetricValue) {
        self.0.insert(metric.metric_name, metric.value);
    }

    pub fn get(&self, metric_name: &str) -> Option<f64> {
        self.0.get(metric_name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for MetricSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        MetricSnapshot(iter.into_iter().collect())
    }
}

/// Run one collection cycle.
///
/// Opens a connection, runs every definition in order over it, and merges the values into a
/// fresh snapshot. The first failing definition aborts the cycle: no partial snapshot is
/// returned. The connection is closed whether the cycle succeeded or not.
pub async fn collect<D: Connect>(
    connector: &D,
    definitions: &[QueryDefinition],
) -> Result<MetricSnapshot, Error> {
    let mut connection = connector
        .connect()
        .instrument(info_span!("Connect"))
        .await
        .map_err(|err| {
            tracing::error!("FetchMetrics: {err}");
            Error::Connection(err)
        })?;

    let result = run_definitions(&mut connection, definitions).await;

    if let Err(err) = connection.close().await {
        tracing::warn!("Failed to close connection: {err}");
    }

    result
}

async fn run_definitions<C: Connection>(
    connection: &mut C,
    definitions: &[QueryDefinition],
) -> Result<MetricSnapshot, Error> {
    let mut snapshot = MetricSnapshot::new();
    for definition in definitions {
        let metric = query::execute(connection, definition).await?;
        snapshot.merge(metric);
    }
    tracing::info!(metrics = snapshot.len(), "Collected metrics");
    Ok(snapshot)
}
