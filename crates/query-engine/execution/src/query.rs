//! Execute one query definition and reduce its rows to a single metric value.

use tracing::{info_span, Instrument};

use pg_query_metrics_configuration::{QueryDefinition, QuerySource};
use query_engine_sql::sql;

use crate::connection::Connection;
use crate::error::Error;
use crate::snapshot::MetricValue;

/// Build the statement a definition issues.
pub fn statement(source: &QuerySource) -> sql::ast::Statement {
    match source {
        QuerySource::Sql(sql) => sql::helpers::raw_statement(sql.as_str()),
        QuerySource::Select {
            column,
            table,
            condition,
        } => sql::ast::Statement::Select(sql::helpers::simple_select(
            column,
            table,
            condition.as_deref(),
        )),
    }
}

/// Run a query definition and extract its metric value.
///
/// The value starts at `0.0`, so a query without rows still reports the metric. Every row
/// that can be read as a number replaces the value: the last readable row wins. Rows that
/// cannot be read are logged and skipped. A failure to issue the query is returned.
pub async fn execute<C: Connection>(
    connection: &mut C,
    definition: &QueryDefinition,
) -> Result<MetricValue, Error> {
    let query = statement(&definition.source).query_sql();

    tracing::debug!(
        metric_name = %definition.metric_name,
        generated_sql = %query.sql,
        "Generated SQL"
    );

    let rows = connection
        .fetch_scalars(&query.sql)
        .instrument(info_span!(
            "Execute query",
            metric_name = %definition.metric_name
        ))
        .await
        .map_err(|source| {
            tracing::error!(
                metric_name = %definition.metric_name,
                "Failed to select. {source}"
            );
            Error::Query {
                metric_name: definition.metric_name.clone(),
                source,
            }
        })?;

    let mut value = 0.0;
    for (index, row) in rows.into_iter().enumerate() {
        match row {
            Ok(scanned) => value = scanned,
            Err(error) => {
                tracing::warn!(
                    metric_name = %definition.metric_name,
                    row = index,
                    "Failed to scan {error}"
                );
            }
        }
    }

    Ok(MetricValue {
        metric_name: definition.metric_name.clone(),
        value,
    })
}
