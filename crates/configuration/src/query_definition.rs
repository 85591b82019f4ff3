//! The unit of configuration: one SQL source and the metadata of the metric it feeds.

use crate::error::InvalidQueryDefinition;

/// One metric's SQL source and its monitoring metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefinition {
    /// Graph this metric is displayed under. Unique per graph, not globally.
    pub key: String,
    /// Display label of the graph.
    pub label: String,
    /// Name of the value inside a snapshot. Later definitions with the same name overwrite
    /// earlier ones.
    pub metric_name: String,
    pub metric_label: String,
    /// Display unit, e.g. "integer", "float" or "percentage".
    pub unit: String,
    pub source: QuerySource,
}

/// Where the scalar of a [`QueryDefinition`] comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource {
    /// Operator supplied SQL, issued verbatim.
    Sql(String),
    /// `SELECT <column> FROM <table> [WHERE <condition>]`, assembled from its parts.
    Select {
        column: String,
        table: String,
        condition: Option<String>,
    },
}

impl QueryDefinition {
    /// Check the definition can be issued: a metric name, and for assembled queries a column
    /// and a table.
    pub fn validate(&self) -> Result<(), InvalidQueryDefinition> {
        if self.metric_name.is_empty() {
            return Err(InvalidQueryDefinition::EmptyMetricName);
        }
        match &self.source {
            QuerySource::Sql(_) => Ok(()),
            QuerySource::Select { column, .. } if column.is_empty() => {
                Err(InvalidQueryDefinition::EmptyColumn)
            }
            QuerySource::Select { table, .. } if table.is_empty() => {
                Err(InvalidQueryDefinition::EmptyTable)
            }
            QuerySource::Select { .. } => Ok(()),
        }
    }
}
