//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::string::*;

impl Statement {
    /// Render the statement into query text.
    pub fn query_sql(&self) -> SQL {
        let mut sql = SQL::new();
        self.to_sql(&mut sql);
        sql
    }

    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Statement::Raw(raw) => raw.to_sql(sql),
            Statement::Select(select) => select.to_sql(sql),
        }
    }
}

impl RawSql {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_fragment(&self.0);
    }
}

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");
        self.select_list.to_sql(sql);
        sql.append_syntax(" ");
        self.from.to_sql(sql);
        self.where_.to_sql(sql);
    }
}

impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_fragment(&self.0);
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("FROM ");
        self.table.to_sql(sql);
    }
}

impl TableName {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_fragment(&self.0);
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self.0 {
            None => {}
            Some(expression) => {
                sql.append_syntax(" WHERE ");
                expression.to_sql(sql);
            }
        }
    }
}
