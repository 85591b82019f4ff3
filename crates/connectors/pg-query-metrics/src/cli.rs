//! Command-line surface: connection flags, the two query modes and schema output.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, CommandFactory, Parser, Subcommand};
use thiserror::Error;

use pg_query_metrics_configuration::connection_settings::{
    DEFAULT_CONNECT_TIMEOUT_SECONDS, DEFAULT_HOST, DEFAULT_PASSWORD_VARIABLE, DEFAULT_PORT,
};
use pg_query_metrics_configuration::values::DEFAULT_METRIC_KEY_PREFIX;
use pg_query_metrics_configuration::{
    parse_configuration, Configuration, DatabaseConnectionSettings, InvalidQueryDefinition,
    MetricKeyPrefix, ParseConfigurationError, QueryDefinition, QuerySource, Secret, SslMode,
};

/// Report the results of SQL queries as monitoring metrics.
#[derive(Debug, Parser)]
#[command(name = "pg-query-metrics", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run every query listed in a query configuration file.
    Multi(MultiArgs),
    /// Run one query assembled from a column, a table and an optional condition.
    Single(SingleArgs),
    /// Print the JSON schema of the query configuration file.
    Schema,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Multi(_) => "multi",
            Command::Single(_) => "single",
            Command::Schema => "schema",
        }
    }
}

/// Where to connect, and how to name what comes back.
#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// Hostname to login to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub hostname: String,
    /// Database port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Postgres User
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub user: String,
    /// Postgres Password. An empty value is sent as an empty password; leaving it out lets
    /// the driver fall back to ~/.pgpass
    #[arg(long, env = DEFAULT_PASSWORD_VARIABLE, hide_env_values = true)]
    pub password: Option<String>,
    /// Database name
    #[arg(long)]
    pub database: Option<String>,
    /// Whether or not to use SSL
    #[arg(long, value_enum, default_value_t = SslMode::Disable)]
    pub sslmode: SslMode,
    /// Maximum wait for connection, in seconds. Zero means wait indefinitely.
    #[arg(long, alias = "connect_timeout", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECONDS)]
    pub connect_timeout: u64,
    /// Metric key prefix
    #[arg(long, default_value = DEFAULT_METRIC_KEY_PREFIX)]
    pub metric_key_prefix: String,
}

impl ConnectionArgs {
    pub fn connection_settings(&self) -> DatabaseConnectionSettings {
        DatabaseConnectionSettings {
            host: self.hostname.clone(),
            port: self.port,
            user: self.user.clone(),
            password: self.password.as_deref().map(Secret::from),
            database: self
                .database
                .clone()
                .filter(|database| !database.is_empty()),
            ssl_mode: self.sslmode,
            connect_timeout: self.connect_timeout,
        }
    }

    pub fn metric_key_prefix(&self) -> MetricKeyPrefix {
        MetricKeyPrefix::new(self.metric_key_prefix.clone())
    }
}

#[derive(Debug, Clone, Args)]
pub struct MultiArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
    /// Query configuration file (TOML)
    #[arg(long)]
    pub sqlconfig: PathBuf,
}

impl MultiArgs {
    pub fn into_configuration(self) -> Result<Configuration, ParseConfigurationError> {
        let queries = parse_configuration(&self.sqlconfig)?;
        Ok(Configuration {
            connection: self.connection.connection_settings(),
            metric_key_prefix: self.connection.metric_key_prefix(),
            queries,
        })
    }
}

#[derive(Debug, Clone, Args)]
pub struct SingleArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
    /// Column (or expression) to select
    #[arg(long)]
    pub column: String,
    /// Table to select from
    #[arg(long)]
    pub table: String,
    /// Condition for the WHERE clause
    #[arg(long)]
    pub condition: Option<String>,
    /// Graph key
    #[arg(long, default_value = "custom")]
    pub key: String,
    /// Graph label
    #[arg(long, default_value = "Custom query")]
    pub label: String,
    /// Metric name
    #[arg(long, default_value = "value")]
    pub metric_name: String,
    /// Metric label
    #[arg(long, default_value = "Value")]
    pub metric_label: String,
    /// Graph unit
    #[arg(long, default_value = "float")]
    pub unit: String,
}

impl SingleArgs {
    pub fn into_configuration(self) -> Result<Configuration, InvalidQueryDefinition> {
        let definition = QueryDefinition {
            key: self.key,
            label: self.label,
            metric_name: self.metric_name,
            metric_label: self.metric_label,
            unit: self.unit,
            source: QuerySource::Select {
                column: self.column,
                table: self.table,
                condition: self.condition,
            },
        };
        definition.validate()?;
        Ok(Configuration {
            connection: self.connection.connection_settings(),
            metric_key_prefix: self.connection.metric_key_prefix(),
            queries: vec![definition],
        })
    }
}

/// Configuration problems found after the arguments themselves parsed.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    QueryFile(#[from] ParseConfigurationError),
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] InvalidQueryDefinition),
}

/// Usage line of a subcommand, as clap prints it.
pub fn usage(subcommand: &str) -> String {
    let mut command = Cli::command();
    command.build();
    command
        .find_subcommand_mut(subcommand)
        .map(|subcommand| subcommand.render_usage().to_string())
        .unwrap_or_default()
}
