//! Metadata information regarding how collected metrics are grouped and labeled.

pub mod graphs;

// re-export without modules
pub use graphs::*;
