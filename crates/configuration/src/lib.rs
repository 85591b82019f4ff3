pub mod configuration;
pub mod connection_settings;
pub mod error;
pub mod query_definition;
pub mod query_file;
pub mod values;

pub use configuration::Configuration;
pub use connection_settings::{DatabaseConnectionSettings, SslMode};
pub use error::{InvalidQueryDefinition, ParseConfigurationError};
pub use query_definition::{QueryDefinition, QuerySource};
pub use query_file::{parse_configuration, QueryFile};
pub use values::{MetricKeyPrefix, Secret};
