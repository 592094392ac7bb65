//! Advertising poster record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Poster {
    pub id: String,
    pub advertiser: String,
    pub link: String,
    pub picture_link: String,
    pub state: String,
}

impl Record for Poster {
    const SCHEMA: TableSchema = TableSchema::new(
        "poster",
        &[
            ColumnDef::new("id", ColumnType::Varchar(100)).primary_key(),
            ColumnDef::new("advertiser", ColumnType::Varchar(1000)).not_null(),
            ColumnDef::new("link", ColumnType::Varchar(1000)).not_null(),
            ColumnDef::new("picture_link", ColumnType::Varchar(1000)).not_null(),
            ColumnDef::new("state", ColumnType::Varchar(100)).not_null(),
        ],
    );
}
