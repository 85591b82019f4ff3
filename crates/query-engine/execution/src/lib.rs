//! Query execution against a PostgreSQL database.
//!
//! A collection cycle opens one connection ([`connection::Connect`]), runs every query
//! definition over it in order ([`query::execute`]) and merges the results into a
//! [`snapshot::MetricSnapshot`] ([`snapshot::collect`]).

pub mod connection;
pub mod error;
pub mod postgres;
pub mod query;
pub mod snapshot;

pub use connection::{Connect, Connection, ScannedRow};
pub use error::{ConnectionError, Error, QueryError, ScanError};
pub use snapshot::{collect, MetricSnapshot, MetricValue};
