//! Type definitions of a low-level SQL string representation.

/// Query text ready to be sent to the database.
///
/// Metric queries are issued through the simple query protocol, so there are no bind
/// parameters: every fragment is part of `sql`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SQL {
    pub sql: String,
}

impl SQL {
    pub fn new() -> SQL {
        SQL { sql: String::new() }
    }
    /// Append SQL syntax we generate ourselves (keywords, whitespace).
    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }
    /// Append an operator supplied fragment. It is trusted configuration and is not escaped.
    pub fn append_fragment(&mut self, fragment: &str) {
        self.sql.push_str(fragment);
    }
}
