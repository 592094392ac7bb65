//! Additive schema synchronization.
//!
//! Creates missing tables, adds missing columns and creates missing indexes.
//! Existing tables, columns, indexes and rows are never altered or dropped,
//! and no version history is kept: the declared schemas are the only source
//! of truth.

use std::collections::HashSet;

use sqlx::AnyPool;
use tracing::{debug, info};

use crate::dialect::Dialect;
use crate::error::{PersistenceError, PersistenceResult};
use crate::schema::TableSchema;

/// Changes applied by one synchronization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub tables_created: Vec<String>,
    /// `(table, column)` pairs.
    pub columns_added: Vec<(String, String)>,
    pub indexes_created: Vec<String>,
}

impl SyncReport {
    /// True when the database already matched every declared schema.
    pub fn is_noop(&self) -> bool {
        self.tables_created.is_empty()
            && self.columns_added.is_empty()
            && self.indexes_created.is_empty()
    }
}

/// Reconciles the database behind `pool` with `schemas`.
///
/// All schemas are validated before the first statement runs. The first
/// failing table aborts the run; changes already applied to earlier tables
/// are kept.
pub async fn sync_schemas(
    pool: &AnyPool,
    dialect: Dialect,
    schemas: &[TableSchema],
) -> PersistenceResult<SyncReport> {
    let mut names = HashSet::new();
    for schema in schemas {
        schema.validate()?;
        if !names.insert(schema.name.to_ascii_lowercase()) {
            return Err(PersistenceError::invalid_schema(
                schema.name,
                "table is registered twice",
            ));
        }
    }

    let mut report = SyncReport::default();
    for schema in schemas {
        sync_table(pool, dialect, schema, &mut report).await?;
    }

    info!(
        tables = schemas.len(),
        tables_created = report.tables_created.len(),
        columns_added = report.columns_added.len(),
        indexes_created = report.indexes_created.len(),
        "Schema synchronization completed"
    );
    Ok(report)
}

async fn sync_table(
    pool: &AnyPool,
    dialect: Dialect,
    schema: &TableSchema,
    report: &mut SyncReport,
) -> PersistenceResult<()> {
    let table = schema.name;
    let sync_err = |source: sqlx::Error| PersistenceError::SchemaSync {
        table: table.to_string(),
        source,
    };

    let existing: HashSet<String> = live_names(pool, &dialect.columns_query(), table)
        .await
        .map_err(sync_err)?;

    if existing.is_empty() {
        debug!(table, "creating table");
        sqlx::raw_sql(&dialect.create_table(schema))
            .execute(pool)
            .await
            .map_err(sync_err)?;
        report.tables_created.push(table.to_string());
    } else {
        for column in schema.columns {
            if existing.contains(&column.name.to_ascii_lowercase()) {
                continue;
            }
            if column.primary_key || column.auto_increment {
                return Err(PersistenceError::invalid_schema(
                    table,
                    format!(
                        "cannot add key column '{}' to an existing table",
                        column.name
                    ),
                ));
            }

            debug!(table, column = column.name, "adding column");
            sqlx::raw_sql(&dialect.add_column(table, column))
                .execute(pool)
                .await
                .map_err(sync_err)?;
            report
                .columns_added
                .push((table.to_string(), column.name.to_string()));
        }
    }

    let indexes = live_names(pool, &dialect.indexes_query(), table)
        .await
        .map_err(sync_err)?;

    for column in schema.columns {
        let Some(index) = column.index_name(table) else {
            continue;
        };
        if indexes.contains(&index.to_ascii_lowercase()) {
            continue;
        }
        if let Some(statement) = dialect.create_index(table, column) {
            debug!(table, index = %index, "creating index");
            sqlx::raw_sql(&statement)
                .execute(pool)
                .await
                .map_err(sync_err)?;
            report.indexes_created.push(index);
        }
    }

    Ok(())
}

/// Runs a single-column introspection query for `table`, lowercasing results.
async fn live_names(
    pool: &AnyPool,
    query: &str,
    table: &str,
) -> Result<HashSet<String>, sqlx::Error> {
    let names: Vec<String> = sqlx::query_scalar(query)
        .bind(table)
        .fetch_all(pool)
        .await?;
    Ok(names.into_iter().map(|n| n.to_ascii_lowercase()).collect())
}
