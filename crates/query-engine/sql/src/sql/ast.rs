//! Type definitions of a SQL AST representation.
//!
//! Column, table and condition are operator supplied fragments (`count(*)`,
//! `pg_stat_activity`, `state = 'active'`), so they are kept as text rather than parsed.

/// A statement that produces the rows of one metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Operator supplied SQL, issued verbatim.
    Raw(RawSql),
    Select(Select),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSql(pub String);

/// `SELECT <select_list> FROM <from> [WHERE <where_>]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub select_list: Expression,
    pub from: From,
    pub where_: Where,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct From {
    pub table: TableName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(pub String);

/// An absent condition renders no `WHERE` clause at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Where(pub Option<Expression>);
