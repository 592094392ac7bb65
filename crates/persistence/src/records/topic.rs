//! Topic record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::codec::{IntFlag, WideText};
use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

/// A discussion thread posted under a node.
///
/// Timestamps are stored as RFC 3339 strings. `tags` holds a JSON array.
/// The `*_top_time` columns are empty unless the topic is pinned in that scope.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub owner: String,
    pub title: String,
    pub created_time: String,
    pub tags: String,
    pub last_reply_user: String,
    pub last_reply_time: String,
    pub reply_count: i64,
    pub up_count: i64,
    pub hit_count: i64,
    pub hot: i64,
    pub favorite_count: i64,
    pub subscribe_count: i64,
    pub home_page_top_time: String,
    pub tab_top_time: String,
    pub node_top_time: String,
    #[sqlx(try_from = "IntFlag")]
    pub deleted: bool,
    pub node_id: String,
    pub node_name: String,
    pub tab: String,
    #[sqlx(try_from = "IntFlag")]
    pub is_hidden: bool,
    pub editor_type: String,
    #[sqlx(try_from = "WideText")]
    pub content: String,
}

impl Record for Topic {
    const SCHEMA: TableSchema = TableSchema::new(
        "topic",
        &[
            ColumnDef::new("id", ColumnType::BigInt)
                .primary_key()
                .auto_increment(),
            ColumnDef::new("owner", ColumnType::Varchar(100))
                .not_null()
                .indexed(),
            ColumnDef::new("title", ColumnType::Varchar(300)).not_null(),
            ColumnDef::new("created_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("tags", ColumnType::Varchar(200)).not_null(),
            ColumnDef::new("last_reply_user", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("last_reply_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("reply_count", ColumnType::Int).not_null(),
            ColumnDef::new("up_count", ColumnType::Int).not_null(),
            ColumnDef::new("hit_count", ColumnType::Int).not_null(),
            ColumnDef::new("hot", ColumnType::Int).not_null(),
            ColumnDef::new("favorite_count", ColumnType::Int).not_null(),
            ColumnDef::new("subscribe_count", ColumnType::Int).not_null(),
            ColumnDef::new("home_page_top_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("tab_top_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("node_top_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("deleted", ColumnType::Bool).not_null(),
            ColumnDef::new("node_id", ColumnType::Varchar(100))
                .not_null()
                .indexed(),
            ColumnDef::new("node_name", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("tab", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("is_hidden", ColumnType::Bool).not_null(),
            ColumnDef::new("editor_type", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("content", ColumnType::MediumText).not_null(),
        ],
    );
}
