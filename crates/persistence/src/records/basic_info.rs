//! Site-wide counters and settings stored as key/value pairs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BasicInfo {
    pub id: String,
    pub value: String,
}

impl Record for BasicInfo {
    const SCHEMA: TableSchema = TableSchema::new(
        "basic_info",
        &[
            ColumnDef::new("id", ColumnType::Varchar(100)).primary_key(),
            ColumnDef::new("value", ColumnType::Varchar(200)).not_null(),
        ],
    );
}
