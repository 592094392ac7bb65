//! Node record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::codec::{IntFlag, WideText};
use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

/// A board that topics are posted into. Nodes belong to a tab and a plane
/// and can be nested through `parent_node`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub created_time: String,
    #[sqlx(try_from = "WideText")]
    pub description: String,
    #[sqlx(try_from = "WideText")]
    pub extra: String,
    pub image: String,
    pub background_image: String,
    pub header_image: String,
    pub background_color: String,
    pub background_repeat: String,
    pub tab_id: String,
    pub parent_node: String,
    pub plane_id: String,
    pub hot: i64,
    pub sorter: i64,
    pub ranking: i64,
    /// JSON array of member names.
    pub moderators: String,
    pub mail_list: String,
    #[sqlx(try_from = "WideText")]
    pub google_group_cookie: String,
    #[sqlx(try_from = "IntFlag")]
    pub is_hidden: bool,
}

impl Record for Node {
    const SCHEMA: TableSchema = TableSchema::new(
        "node",
        &[
            ColumnDef::new("id", ColumnType::Varchar(100)).primary_key(),
            ColumnDef::new("name", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("created_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("description", ColumnType::MediumText).not_null(),
            ColumnDef::new("extra", ColumnType::MediumText).not_null(),
            ColumnDef::new("image", ColumnType::Varchar(200)).not_null(),
            ColumnDef::new("background_image", ColumnType::Varchar(200)).not_null(),
            ColumnDef::new("header_image", ColumnType::Varchar(200)).not_null(),
            ColumnDef::new("background_color", ColumnType::Varchar(20)).not_null(),
            ColumnDef::new("background_repeat", ColumnType::Varchar(20)).not_null(),
            ColumnDef::new("tab_id", ColumnType::Varchar(100))
                .not_null()
                .indexed(),
            ColumnDef::new("parent_node", ColumnType::Varchar(200)).not_null(),
            ColumnDef::new("plane_id", ColumnType::Varchar(50)).not_null(),
            ColumnDef::new("hot", ColumnType::Int).not_null(),
            ColumnDef::new("sorter", ColumnType::Int).not_null(),
            ColumnDef::new("ranking", ColumnType::Int).not_null(),
            ColumnDef::new("moderators", ColumnType::Varchar(200)).not_null(),
            ColumnDef::new("mail_list", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("google_group_cookie", ColumnType::Text).not_null(),
            ColumnDef::new("is_hidden", ColumnType::Bool).not_null(),
        ],
    );
}
