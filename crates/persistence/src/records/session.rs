//! Web session record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

/// Server-side session storage keyed by the session cookie value.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Session {
    pub session_key: String,
    pub session_data: Option<Vec<u8>>,
    /// Unix timestamp, seconds.
    pub session_expiry: i64,
}

impl Record for Session {
    const SCHEMA: TableSchema = TableSchema::new(
        "session",
        &[
            ColumnDef::new("session_key", ColumnType::Char(64)).primary_key(),
            ColumnDef::new("session_data", ColumnType::Blob),
            ColumnDef::new("session_expiry", ColumnType::Int).not_null(),
        ],
    );
}
