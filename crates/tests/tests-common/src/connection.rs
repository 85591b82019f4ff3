//! An in-memory stand-in for a database connection.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use query_engine_execution::{
    Connect, Connection, ConnectionError, QueryError, ScanError, ScannedRow,
};

/// What the scripted database answers to a query.
#[derive(Debug, Clone)]
pub enum Reply {
    Rows(Vec<ScannedRow>),
    Fail(String),
}

/// Everything the code under test did with the scripted database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    pub connects: usize,
    pub closes: usize,
    /// Query text, in the order it was issued.
    pub issued: Vec<String>,
}

#[derive(Debug, Default)]
struct Script {
    replies: BTreeMap<String, Reply>,
    refuse_connections: Option<String>,
    journal: Journal,
}

/// Answers queries from a script keyed by exact query text. Unknown queries fail.
///
/// Clones share the same script and journal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConnector {
    script: Arc<Mutex<Script>>,
}

impl ScriptedConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `sql` with these rows.
    pub fn reply(self, sql: &str, rows: Vec<ScannedRow>) -> Self {
        self.lock().replies.insert(sql.to_string(), Reply::Rows(rows));
        self
    }

    /// Answer `sql` with one numeric row per value.
    pub fn values(self, sql: &str, values: &[f64]) -> Self {
        self.reply(sql, values.iter().copied().map(Ok).collect())
    }

    /// Answer `sql` with a single NULL row.
    pub fn null_row(self, sql: &str) -> Self {
        self.reply(sql, vec![Err(ScanError::Null)])
    }

    /// Make `sql` fail as if the server rejected it.
    pub fn fail(self, sql: &str, message: &str) -> Self {
        self.lock()
            .replies
            .insert(sql.to_string(), Reply::Fail(message.to_string()));
        self
    }

    /// Make every connection attempt fail.
    pub fn refuse_connections(self, message: &str) -> Self {
        self.lock().refuse_connections = Some(message.to_string());
        self
    }

    pub fn journal(&self) -> Journal {
        self.lock().journal.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().expect("script lock poisoned")
    }
}

#[async_trait]
impl Connect for ScriptedConnector {
    type Connection = ScriptedConnection;

    async fn connect(&self) -> Result<ScriptedConnection, ConnectionError> {
        let mut script = self.lock();
        script.journal.connects += 1;
        if let Some(message) = &script.refuse_connections {
            return Err(ConnectionError::DB(sqlx::Error::Protocol(message.clone())));
        }
        Ok(ScriptedConnection {
            script: Arc::clone(&self.script),
        })
    }
}

/// A connection handed out by [`ScriptedConnector`].
#[derive(Debug)]
pub struct ScriptedConnection {
    script: Arc<Mutex<Script>>,
}

#[async_trait]
impl Connection for ScriptedConnection {
    async fn fetch_scalars(&mut self, sql: &str) -> Result<Vec<ScannedRow>, QueryError> {
        let mut script = self.script.lock().expect("script lock poisoned");
        script.journal.issued.push(sql.to_string());
        match script.replies.get(sql) {
            Some(Reply::Rows(rows)) => Ok(rows.clone()),
            Some(Reply::Fail(message)) => {
                Err(QueryError::DB(sqlx::Error::Protocol(message.clone())))
            }
            None => Err(QueryError::DB(sqlx::Error::Protocol(format!(
                "no reply scripted for: {sql}"
            )))),
        }
    }

    async fn close(self) -> Result<(), ConnectionError> {
        self.script
            .lock()
            .expect("script lock poisoned")
            .journal
            .closes += 1;
        Ok(())
    }
}
