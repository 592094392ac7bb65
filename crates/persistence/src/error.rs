//! Error types for the persistence layer.

use std::time::Duration;

use thiserror::Error;

/// Alias for `Result<T, PersistenceError>`.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors raised while opening, synchronizing or closing the database.
///
/// Every variant except [`PersistenceError::Closed`] is a startup or shutdown
/// condition; callers are expected to abort rather than recover.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Unsupported driver or malformed connection settings.
    #[error("Invalid database configuration: {0}")]
    Config(String),

    /// The database server could not be reached or refused the credentials.
    #[error("Failed to connect to {driver} database: {source}")]
    Connect {
        driver: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The explicit `CREATE DATABASE` step failed.
    #[error("Failed to create database '{database}': {source}")]
    CreateDatabase {
        database: String,
        #[source]
        source: sqlx::Error,
    },

    /// A declared table schema is malformed or needs a non-additive change.
    #[error("Invalid schema for table '{table}': {reason}")]
    InvalidSchema { table: String, reason: String },

    /// Reconciling one table against its declared schema failed.
    #[error("Failed to synchronize table '{table}': {source}")]
    SchemaSync {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    /// The engine handle was requested after the adapter was closed.
    #[error("Database engine is closed")]
    Closed,

    /// Closing the engine did not finish in time.
    #[error("Timed out closing database engine after {timeout:?}")]
    Teardown { timeout: Duration },
}

impl PersistenceError {
    /// Whether retrying the failed operation could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, PersistenceError::Connect { .. })
    }

    pub(crate) fn invalid_schema(table: &str, reason: impl Into<String>) -> Self {
        PersistenceError::InvalidSchema {
            table: table.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_connect_errors_are_transient() {
        let connect = PersistenceError::Connect {
            driver: "mysql",
            source: sqlx::Error::PoolTimedOut,
        };
        assert!(connect.is_transient());
        assert!(!PersistenceError::Closed.is_transient());
        assert!(!PersistenceError::Config("empty driver".into()).is_transient());
    }

    #[test]
    fn test_schema_sync_error_names_table() {
        let err = PersistenceError::SchemaSync {
            table: "topic".into(),
            source: sqlx::Error::RowNotFound,
        };
        assert!(err.to_string().contains("'topic'"));
    }
}
