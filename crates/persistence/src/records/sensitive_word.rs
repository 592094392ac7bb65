//! Sensitive word list entry.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SensitiveWord {
    pub word: String,
}

impl Record for SensitiveWord {
    const SCHEMA: TableSchema = TableSchema::new(
        "sensitive_word",
        &[ColumnDef::new("word", ColumnType::Varchar(64)).primary_key()],
    );
}
