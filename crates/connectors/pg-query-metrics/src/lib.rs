//! Report the results of operator-supplied SQL queries as monitoring metrics.
//!
//! [`plugin::QueryMetricsPlugin`] ties a configuration to a database connector and
//! exposes it through the [`plugin::MetricsPlugin`] contract; [`output`] renders its
//! results for the monitoring agent.

pub mod cli;
pub mod output;
pub mod plugin;
pub mod telemetry;

pub use plugin::{MetricsPlugin, QueryMetricsPlugin};
