//! SQL text for metric queries.

pub mod sql;
