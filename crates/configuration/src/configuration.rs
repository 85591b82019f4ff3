//! Configuration for the adapter.

use crate::connection_settings::DatabaseConnectionSettings;
use crate::query_definition::QueryDefinition;
use crate::values::MetricKeyPrefix;

/// The 'Configuration' type collects all the information necessary to run collection cycles.
///
/// It is produced once at startup, either from a query configuration file (multi-query mode)
/// or from a single definition assembled from command-line parameters (single-query mode),
/// and is never modified afterwards. Every definition in `queries` has passed
/// `QueryDefinition::validate`.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub connection: DatabaseConnectionSettings,
    pub metric_key_prefix: MetricKeyPrefix,
    pub queries: Vec<QueryDefinition>,
}
