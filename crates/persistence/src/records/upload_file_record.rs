//! Uploaded file record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::codec::IntFlag;
use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

/// A file a member uploaded to object storage. `size` is in bytes.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UploadFileRecord {
    pub id: i64,
    pub file_name: String,
    pub file_path: String,
    pub file_url: String,
    pub file_type: String,
    pub file_ext: String,
    pub member_id: String,
    pub created_time: String,
    pub size: i64,
    #[sqlx(try_from = "IntFlag")]
    pub deleted: bool,
}

impl Record for UploadFileRecord {
    const SCHEMA: TableSchema = TableSchema::new(
        "upload_file_record",
        &[
            ColumnDef::new("id", ColumnType::BigInt)
                .primary_key()
                .auto_increment(),
            ColumnDef::new("file_name", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("file_path", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("file_url", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("file_type", ColumnType::Varchar(10)).not_null(),
            ColumnDef::new("file_ext", ColumnType::Varchar(20)).not_null(),
            ColumnDef::new("member_id", ColumnType::Varchar(100))
                .not_null()
                .indexed(),
            ColumnDef::new("created_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("size", ColumnType::Int).not_null(),
            ColumnDef::new("deleted", ColumnType::Bool).not_null(),
        ],
    );
}
