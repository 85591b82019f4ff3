//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

/// An empty `WHERE` clause.
pub fn empty_where() -> Where {
    Where(None)
}

/// Wrap operator supplied SQL so it is issued as-is.
pub fn raw_statement(sql: impl Into<String>) -> Statement {
    Statement::Raw(RawSql(sql.into()))
}

/// Build `SELECT <column> FROM <table>`, with a `WHERE` clause only when a non-empty
/// condition is given.
pub fn simple_select(column: &str, table: &str, condition: Option<&str>) -> Select {
    Select {
        select_list: Expression(column.to_string()),
        from: From {
            table: TableName(table.to_string()),
        },
        where_: match condition {
            Some(condition) if !condition.is_empty() => {
                Where(Some(Expression(condition.to_string())))
            }
            _ => empty_where(),
        },
    }
}
