//! Favorites record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

/// A member following a topic, node or another member.
/// `favorites_type` selects which kind of object `object_id` refers to.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Favorites {
    pub id: i64,
    pub favorites_type: i64,
    pub object_id: String,
    pub created_time: String,
    pub member_id: String,
}

impl Record for Favorites {
    const SCHEMA: TableSchema = TableSchema::new(
        "favorites",
        &[
            ColumnDef::new("id", ColumnType::BigInt)
                .primary_key()
                .auto_increment(),
            ColumnDef::new("favorites_type", ColumnType::Int).not_null(),
            ColumnDef::new("object_id", ColumnType::Varchar(100))
                .not_null()
                .indexed(),
            ColumnDef::new("created_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("member_id", ColumnType::Varchar(100))
                .not_null()
                .indexed(),
        ],
    );
}
