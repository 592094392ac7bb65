//! Front-end configuration record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::codec::WideText;
use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

/// Editable front-end settings (footer, site title, visual theme), grouped by
/// `field`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct FrontConf {
    pub id: String,
    #[sqlx(try_from = "WideText")]
    pub value: String,
    pub field: String,
}

impl Record for FrontConf {
    const SCHEMA: TableSchema = TableSchema::new(
        "front_conf",
        &[
            ColumnDef::new("id", ColumnType::Varchar(100)).primary_key(),
            ColumnDef::new("value", ColumnType::MediumText).not_null(),
            ColumnDef::new("field", ColumnType::Varchar(100))
                .not_null()
                .indexed(),
        ],
    );
}
