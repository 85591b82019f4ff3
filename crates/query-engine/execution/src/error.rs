//! Errors for query execution.

use std::time::Duration;

use thiserror::Error;

/// Errors that abort a collection cycle.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to connect to the database: {0}")]
    Connection(#[from] ConnectionError),
    #[error("query for metric '{metric_name}' failed: {source}")]
    Query {
        metric_name: String,
        #[source]
        source: QueryError,
    },
}

/// Opening a connection failed.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("{0}")]
    DB(sqlx::Error),
}

/// Issuing a query failed: bad syntax, missing permissions, or a lost connection.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{0}")]
    DB(sqlx::Error),
}

/// A row whose first column could not be read as a number. The row is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("value is NULL")]
    Null,
    #[error("row has no columns")]
    NoColumns,
    #[error("value is not numeric: {0}")]
    NotNumeric(String),
}
