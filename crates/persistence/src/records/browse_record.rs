//! Browse history record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::codec::IntFlag;
use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BrowseRecord {
    pub id: i64,
    pub member_id: String,
    pub record_type: i64,
    pub object_id: String,
    pub created_time: String,
    #[sqlx(try_from = "IntFlag")]
    pub expired: bool,
}

impl Record for BrowseRecord {
    const SCHEMA: TableSchema = TableSchema::new(
        "browse_record",
        &[
            ColumnDef::new("id", ColumnType::BigInt)
                .primary_key()
                .auto_increment(),
            ColumnDef::new("member_id", ColumnType::Varchar(100))
                .not_null()
                .indexed(),
            ColumnDef::new("record_type", ColumnType::Int).not_null(),
            ColumnDef::new("object_id", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("created_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("expired", ColumnType::Bool).not_null(),
        ],
    );
}
