//! Notification record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

/// Something a member should be told about: a reply, a mention, a thank-you.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub notification_type: i64,
    pub object_id: i64,
    pub created_time: String,
    pub sender_id: String,
    pub receiver_id: String,
    /// 1 unread, 2 read, 3 deleted.
    pub status: i64,
}

impl Record for Notification {
    const SCHEMA: TableSchema = TableSchema::new(
        "notification",
        &[
            ColumnDef::new("id", ColumnType::BigInt)
                .primary_key()
                .auto_increment(),
            ColumnDef::new("notification_type", ColumnType::Int).not_null(),
            ColumnDef::new("object_id", ColumnType::BigInt).not_null(),
            ColumnDef::new("created_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("sender_id", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("receiver_id", ColumnType::Varchar(100))
                .not_null()
                .indexed(),
            ColumnDef::new("status", ColumnType::Int)
                .not_null()
                .default_value("1"),
        ],
    );
}
