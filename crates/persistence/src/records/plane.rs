//! Plane record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::codec::IntFlag;
use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

/// Top-level grouping of nodes on the node navigation page.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Plane {
    pub id: String,
    pub name: String,
    pub created_time: String,
    pub sorter: i64,
    pub background_color: String,
    pub color: String,
    #[sqlx(try_from = "IntFlag")]
    pub visible: bool,
}

impl Record for Plane {
    const SCHEMA: TableSchema = TableSchema::new(
        "plane",
        &[
            ColumnDef::new("id", ColumnType::Varchar(50)).primary_key(),
            ColumnDef::new("name", ColumnType::Varchar(50)).not_null(),
            ColumnDef::new("created_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("sorter", ColumnType::Int).not_null(),
            ColumnDef::new("background_color", ColumnType::Varchar(20)).not_null(),
            ColumnDef::new("color", ColumnType::Varchar(20)).not_null(),
            ColumnDef::new("visible", ColumnType::Bool).not_null(),
        ],
    );
}
