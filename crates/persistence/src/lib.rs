//! Persistence layer for the forum backend.
//!
//! This crate contains:
//! - The database adapter that owns the engine handle (open, sync, close)
//! - The driver registry and per-driver database provisioning
//! - Declarative table schemas and additive schema synchronization
//! - Record types for every forum table

pub mod db;
pub mod dialect;
pub mod driver;
pub mod error;
pub mod records;
pub mod schema;
pub mod sync;

pub use db::{Adapter, DatabaseConfig};
pub use error::{PersistenceError, PersistenceResult};
pub use records::{IntFlag, Record, WideText, REGISTRY};
pub use schema::{ColumnDef, ColumnType, IndexKind, TableSchema};
pub use sync::SyncReport;
