//! The PostgreSQL connection used by the binary, on top of `sqlx`.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgRow, PgSslMode};
use sqlx::{Executor, PgConnection, Row};
use tracing::{info_span, Instrument};

use pg_query_metrics_configuration::{DatabaseConnectionSettings, SslMode};

use crate::connection::{Connect, Connection, ScannedRow};
use crate::error::{ConnectionError, QueryError, ScanError};

const APPLICATION_NAME: &str = "pg-query-metrics";

/// Opens a fresh connection per collection cycle.
#[derive(Clone)]
pub struct PgConnector {
    options: PgConnectOptions,
    connect_timeout: Option<Duration>,
}

impl PgConnector {
    pub fn new(settings: &DatabaseConnectionSettings) -> Self {
        let mut options = PgConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .ssl_mode(ssl_mode(settings.ssl_mode))
            .application_name(APPLICATION_NAME);
        if let Some(password) = &settings.password {
            options = options.password(password.expose());
        }
        if let Some(database) = &settings.database {
            options = options.database(database);
        }

        // libpq semantics: zero means wait indefinitely
        let connect_timeout = match settings.connect_timeout {
            0 => None,
            seconds => Some(Duration::from_secs(seconds)),
        };

        PgConnector {
            options,
            connect_timeout,
        }
    }
}

fn ssl_mode(mode: SslMode) -> PgSslMode {
    match mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Allow => PgSslMode::Allow,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
        SslMode::VerifyCa => PgSslMode::VerifyCa,
        SslMode::VerifyFull => PgSslMode::VerifyFull,
    }
}

#[async_trait]
impl Connect for PgConnector {
    type Connection = PostgresConnection;

    async fn connect(&self) -> Result<PostgresConnection, ConnectionError> {
        let connect = <PgConnection as sqlx::Connection>::connect_with(&self.options);

        let connection = match self.connect_timeout {
            None => connect.await,
            Some(limit) => tokio::time::timeout(limit, connect)
                .await
                .map_err(|_| ConnectionError::Timeout(limit))?,
        }
        .map_err(ConnectionError::DB)?;

        Ok(PostgresConnection(connection))
    }
}

/// A single, unpooled PostgreSQL connection.
pub struct PostgresConnection(PgConnection);

#[async_trait]
impl Connection for PostgresConnection {
    async fn fetch_scalars(&mut self, sql: &str) -> Result<Vec<ScannedRow>, QueryError> {
        // a bare &str uses the simple query protocol, so every value arrives as text
        let rows: Vec<PgRow> = (&mut self.0)
            .fetch_all(sql)
            .instrument(info_span!("Database request"))
            .await
            .map_err(QueryError::DB)?;

        Ok(rows.iter().map(scan_scalar).collect())
    }

    async fn close(self) -> Result<(), ConnectionError> {
        <PgConnection as sqlx::Connection>::close(self.0)
            .await
            .map_err(ConnectionError::DB)
    }
}

/// Read the first column of a row as a number.
fn scan_scalar(row: &PgRow) -> ScannedRow {
    if row.is_empty() {
        return Err(ScanError::NoColumns);
    }
    match row.try_get_unchecked::<Option<&str>, _>(0) {
        Ok(text) => parse_scalar(text),
        Err(error) => Err(ScanError::NotNumeric(error.to_string())),
    }
}

/// Parse the text form of a value, as the simple query protocol delivers it.
fn parse_scalar(text: Option<&str>) -> ScannedRow {
    let text = text.ok_or(ScanError::Null)?;
    text.parse::<f64>()
        .map_err(|_| ScanError::NotNumeric(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssl_modes_map_one_to_one() {
        assert!(matches!(ssl_mode(SslMode::Disable), PgSslMode::Disable));
        assert!(matches!(ssl_mode(SslMode::Prefer), PgSslMode::Prefer));
        assert!(matches!(ssl_mode(SslMode::VerifyFull), PgSslMode::VerifyFull));
    }

    #[test]
    fn integer_numeric_and_float_text_parse() {
        assert_eq!(parse_scalar(Some("42")), Ok(42.0));
        assert_eq!(parse_scalar(Some("-7")), Ok(-7.0));
        assert_eq!(parse_scalar(Some("0.25")), Ok(0.25));
        assert_eq!(parse_scalar(Some("1.5e3")), Ok(1500.0));
    }

    #[test]
    fn null_and_non_numeric_text_are_scan_errors() {
        assert_eq!(parse_scalar(None), Err(ScanError::Null));
        assert_eq!(
            parse_scalar(Some("abc")),
            Err(ScanError::NotNumeric("abc".to_string()))
        );
        // booleans come back as "t" / "f"
        assert_eq!(
            parse_scalar(Some("t")),
            Err(ScanError::NotNumeric("t".to_string()))
        );
        assert_eq!(
            parse_scalar(Some("")),
            Err(ScanError::NotNumeric(String::new()))
        );
    }

    #[test]
    fn zero_connect_timeout_waits_indefinitely() {
        let mut settings = DatabaseConnectionSettings::for_user("postgres");
        settings.connect_timeout = 0;
        assert_eq!(PgConnector::new(&settings).connect_timeout, None);

        settings.connect_timeout = 3;
        assert_eq!(
            PgConnector::new(&settings).connect_timeout,
            Some(Duration::from_secs(3))
        );
    }
}
