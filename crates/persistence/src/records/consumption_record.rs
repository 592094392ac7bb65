//! Coin ledger record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;
use crate::schema::{ColumnDef, ColumnType, TableSchema};

/// One movement of forum coins. `amount` is signed; `balance` is the
/// receiver's balance after the movement.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    pub id: i64,
    pub amount: i64,
    pub balance: i64,
    pub receiver_id: String,
    pub consumer_id: String,
    pub object_id: i64,
    pub created_time: String,
    pub consumption_type: i64,
}

impl Record for ConsumptionRecord {
    const SCHEMA: TableSchema = TableSchema::new(
        "consumption_record",
        &[
            ColumnDef::new("id", ColumnType::BigInt)
                .primary_key()
                .auto_increment(),
            ColumnDef::new("amount", ColumnType::Int).not_null(),
            ColumnDef::new("balance", ColumnType::Int).not_null(),
            ColumnDef::new("receiver_id", ColumnType::Varchar(100))
                .not_null()
                .indexed(),
            ColumnDef::new("consumer_id", ColumnType::Varchar(100)).not_null(),
            ColumnDef::new("object_id", ColumnType::BigInt).not_null(),
            ColumnDef::new("created_time", ColumnType::Varchar(40)).not_null(),
            ColumnDef::new("consumption_type", ColumnType::Int).not_null(),
        ],
    );
}
