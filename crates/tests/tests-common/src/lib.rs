//! Helpers shared by the test suites of the workspace.

pub mod connection;
pub mod deployment;
pub mod logs;
