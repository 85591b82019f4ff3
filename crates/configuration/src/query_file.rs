//! The on-disk format of the multi-query configuration file.

use std::collections::BTreeSet;
use std::path::Path;

use config::{Config, File, FileFormat};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ParseConfigurationError;
use crate::query_definition::{QueryDefinition, QuerySource};

/// A TOML file holding an ordered list of `[[sqlconfig]]` tables.
///
/// Key lookups accept both the lower case spelling and the capitalised one
/// (`[[SQLConfig]]`, `MetricsName`, ...) used by existing configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QueryFile {
    #[serde(default, rename = "sqlconfig", alias = "SQLConfig")]
    pub queries: Vec<QueryFileEntry>,
}

/// One `[[sqlconfig]]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QueryFileEntry {
    /// Graph key the metric is grouped under.
    #[serde(default, alias = "Key")]
    pub key: String,
    /// Graph label.
    #[serde(default, alias = "Label")]
    pub label: String,
    /// Metric name, unique across the file.
    #[serde(default, rename = "metricsname", alias = "MetricsName")]
    pub metrics_name: String,
    #[serde(default, rename = "metricslabel", alias = "MetricsLabel")]
    pub metrics_label: String,
    #[serde(default, alias = "Unit")]
    pub unit: String,
    /// Query yielding the metric value in the first column.
    #[serde(default, alias = "SQL")]
    pub sql: String,
}

impl From<QueryFileEntry> for QueryDefinition {
    fn from(entry: QueryFileEntry) -> Self {
        QueryDefinition {
            key: entry.key,
            label: entry.label,
            metric_name: entry.metrics_name,
            metric_label: entry.metrics_label,
            unit: entry.unit,
            source: QuerySource::Sql(entry.sql),
        }
    }
}

/// Parse the query definitions from a configuration file.
pub fn parse_configuration(
    configuration_file: impl AsRef<Path>,
) -> Result<Vec<QueryDefinition>, ParseConfigurationError> {
    let configuration_file = configuration_file.as_ref();

    let query_file: QueryFile = Config::builder()
        .add_source(File::from(configuration_file).format(FileFormat::Toml))
        .build()
        .and_then(|config| config.try_deserialize())
        .map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.to_owned(),
            message: error.to_string(),
        })?;

    if query_file.queries.is_empty() {
        tracing::warn!(
            file = %configuration_file.display(),
            "query configuration defines no queries"
        );
    }

    let mut seen = BTreeSet::new();
    let mut definitions = Vec::with_capacity(query_file.queries.len());
    for (index, entry) in query_file.queries.into_iter().enumerate() {
        let definition = QueryDefinition::from(entry);
        definition
            .validate()
            .map_err(|source| ParseConfigurationError::InvalidDefinition {
                file_path: configuration_file.to_owned(),
                index,
                source,
            })?;
        // duplicates are allowed; the later one wins in every snapshot
        if !seen.insert(definition.metric_name.clone()) {
            tracing::warn!(
                metric_name = %definition.metric_name,
                "metric name is defined more than once"
            );
        }
        definitions.push(definition);
    }

    Ok(definitions)
}
