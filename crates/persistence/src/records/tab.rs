//! Tab record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::codec::IntFlag;
use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub name: String,
    pub sorter: i64,
    pub created_time: String,
    pub default_node: String,
    #[sqlx(try_from = "IntFlag")]
    pub home_page: bool,
}

impl Record for Tab {
    const SCHEMA: TableSchema = TableSchema::new(
        "tab",
        &[
            ColumnDef::new("id", ColumnType::Varchar(100)).primary_key(),
            ColumnDef::new("name", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("sorter", ColumnType::Int).not_null(),
            ColumnDef::new("created_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("default_node", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("home_page", ColumnType::Bool).not_null(),
        ],
    );
}
