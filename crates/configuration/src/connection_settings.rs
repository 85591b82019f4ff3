//! Database connection settings.

use crate::values::Secret;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 5;
pub const DEFAULT_PASSWORD_VARIABLE: &str = "PGPASSWORD";

/// Database connection settings.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConnectionSettings {
    /// Hostname (or socket directory) of the PostgreSQL server.
    pub host: String,
    pub port: u16,
    /// Role to log in as. Always required.
    pub user: String,
    /// Password for `user`. Left unset, the server decides whether one is needed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,
    /// Database to connect to. Defaults to the server's choice (usually the user name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default)]
    pub ssl_mode: SslMode,
    /// Maximum wait for a connection, in seconds. Zero waits indefinitely.
    #[serde(default = "connect_timeout_default")]
    pub connect_timeout: u64,
}

impl DatabaseConnectionSettings {
    /// Settings for `user` with every other field at its default.
    pub fn for_user(user: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: user.into(),
            password: None,
            database: None,
            ssl_mode: SslMode::default(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT_SECONDS,
        }
    }
}

fn connect_timeout_default() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECONDS
}

/// Whether or not to use SSL, following libpq's `sslmode` values.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SslMode {
    #[default]
    Disable,
    Allow,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Allow => "allow",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl std::fmt::Display for SslMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
