//! Reply record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::codec::{IntFlag, WideText};
use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

/// A reply to a topic. `parent_id` is zero for top-level replies.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Reply {
    pub id: i64,
    pub author: String,
    pub topic_id: i64,
    pub parent_id: i64,
    pub tags: String,
    pub created_time: String,
    #[sqlx(try_from = "IntFlag")]
    pub deleted: bool,
    #[sqlx(try_from = "IntFlag")]
    pub is_hidden: bool,
    pub thanks_num: i64,
    pub editor_type: String,
    #[sqlx(try_from = "WideText")]
    pub content: String,
}

impl Record for Reply {
    const SCHEMA: TableSchema = TableSchema::new(
        "reply",
        &[
            ColumnDef::new("id", ColumnType::BigInt)
                .primary_key()
                .auto_increment(),
            ColumnDef::new("author", ColumnType::Varchar(100))
                .not_null()
                .indexed(),
            ColumnDef::new("topic_id", ColumnType::BigInt)
                .not_null()
                .indexed(),
            ColumnDef::new("parent_id", ColumnType::BigInt).not_null(),
            ColumnDef::new("tags", ColumnType::Varchar(200)).not_null(),
            ColumnDef::new("created_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("deleted", ColumnType::Bool).not_null(),
            ColumnDef::new("is_hidden", ColumnType::Bool).not_null(),
            ColumnDef::new("thanks_num", ColumnType::Int).not_null(),
            ColumnDef::new("editor_type", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("content", ColumnType::MediumText).not_null(),
        ],
    );
}
