//! Machine translation provider record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::codec::IntFlag;
use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

/// Credentials for an external translation service. `key` is a reserved word
/// on MySQL; queries must quote it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Translator {
    pub id: String,
    pub name: String,
    pub translator: String,
    pub key: String,
    #[sqlx(try_from = "IntFlag")]
    pub enable: bool,
    #[sqlx(try_from = "IntFlag")]
    pub visible: bool,
}

impl Record for Translator {
    const SCHEMA: TableSchema = TableSchema::new(
        "translator",
        &[
            ColumnDef::new("id", ColumnType::Varchar(100)).primary_key(),
            ColumnDef::new("name", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("translator", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("key", ColumnType::Varchar(200)).not_null(),
            ColumnDef::new("enable", ColumnType::Bool).not_null(),
            ColumnDef::new("visible", ColumnType::Bool).not_null(),
        ],
    );
}
