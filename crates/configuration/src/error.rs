//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

/// The errors that can be thrown when loading the query configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ParseConfigurationError {
    #[error("unable to read query configuration {}: {message}", .file_path.display())]
    ParseError { file_path: PathBuf, message: String },
    #[error("query definition #{index} in {}: {source}", .file_path.display())]
    InvalidDefinition {
        file_path: PathBuf,
        index: usize,
        #[source]
        source: InvalidQueryDefinition,
    },
}

/// A query definition that breaks the contract the query pipeline relies on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQueryDefinition {
    #[error("metric name must not be empty")]
    EmptyMetricName,
    #[error("column must not be empty")]
    EmptyColumn,
    #[error("table must not be empty")]
    EmptyTable,
}
