//! The database seam of a collection cycle.

use async_trait::async_trait;

use crate::error::{ConnectionError, QueryError, ScanError};

/// The outcome of reading the first column of one result row as a number.
pub type ScannedRow = Result<f64, ScanError>;

/// Opens the connection a collection cycle runs over.
#[async_trait]
pub trait Connect: Sync {
    type Connection: Connection;

    async fn connect(&self) -> Result<Self::Connection, ConnectionError>;
}

/// An open connection, owned by exactly one collection cycle.
#[async_trait]
pub trait Connection: Send + Sized {
    /// Issue `sql` and read the first column of every result row, in row order.
    ///
    /// A row that cannot be read is reported in place rather than failing the query.
    async fn fetch_scalars(&mut self, sql: &str) -> Result<Vec<ScannedRow>, QueryError>;

    /// Release the connection.
    async fn close(self) -> Result<(), ConnectionError>;
}
