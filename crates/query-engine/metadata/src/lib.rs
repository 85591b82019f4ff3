//! Display metadata derived from query definitions.

pub mod metadata;
