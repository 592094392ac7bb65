//! SQL rendering for the supported database families.
//!
//! Identifiers passed here have already been validated by
//! [`TableSchema::validate`](crate::schema::TableSchema::validate), so they are
//! quoted but never escaped.

use crate::schema::{ColumnDef, ColumnType, IndexKind, TableSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    MySql,
    Postgres,
    Sqlite,
}

impl Dialect {
    pub fn quote(self, ident: &str) -> String {
        match self {
            Dialect::MySql => format!("`{}`", ident),
            Dialect::Postgres | Dialect::Sqlite => format!("\"{}\"", ident),
        }
    }

    /// Placeholder for the first bound parameter.
    fn first_param(self) -> &'static str {
        match self {
            Dialect::Postgres => "$1",
            Dialect::MySql | Dialect::Sqlite => "?",
        }
    }

    pub fn column_type(self, ty: ColumnType) -> String {
        match (self, ty) {
            (_, ColumnType::Char(n)) => format!("CHAR({})", n),
            (_, ColumnType::Varchar(n)) => format!("VARCHAR({})", n),
            (_, ColumnType::Text) => "TEXT".to_string(),
            (Dialect::MySql, ColumnType::MediumText) => "MEDIUMTEXT".to_string(),
            (_, ColumnType::MediumText) => "TEXT".to_string(),
            (Dialect::MySql, ColumnType::Int) => "INT".to_string(),
            (_, ColumnType::Int) => "INTEGER".to_string(),
            (_, ColumnType::BigInt) => "BIGINT".to_string(),
            // Flags are integers everywhere; see `records::codec::IntFlag`.
            (Dialect::Sqlite, ColumnType::Bool) => "INTEGER".to_string(),
            (_, ColumnType::Bool) => "SMALLINT".to_string(),
            (Dialect::Postgres, ColumnType::Blob) => "BYTEA".to_string(),
            (_, ColumnType::Blob) => "BLOB".to_string(),
        }
    }

    /// Default used when a `NOT NULL` column is added to a table that may
    /// already hold rows. `None` when the dialect fills the gap itself or
    /// rejects literal defaults for the type.
    fn fill_default(self, ty: ColumnType) -> Option<&'static str> {
        match (self, ty) {
            (Dialect::MySql, ColumnType::Text | ColumnType::MediumText | ColumnType::Blob) => None,
            (_, ColumnType::Char(_) | ColumnType::Varchar(_))
            | (_, ColumnType::Text | ColumnType::MediumText) => Some("''"),
            (_, ColumnType::Int | ColumnType::BigInt | ColumnType::Bool) => Some("0"),
            (Dialect::Postgres, ColumnType::Blob) => Some("''"),
            (Dialect::Sqlite, ColumnType::Blob) => Some("X''"),
        }
    }

    fn column_definition(self, column: &ColumnDef, sole_key: bool) -> String {
        let name = self.quote(column.name);

        if column.auto_increment {
            return match self {
                Dialect::MySql => format!("{} BIGINT NOT NULL AUTO_INCREMENT", name),
                Dialect::Postgres => format!("{} BIGSERIAL NOT NULL", name),
                // SQLite only honours AUTOINCREMENT on an inline INTEGER key.
                Dialect::Sqlite => format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", name),
            };
        }

        let mut sql = format!("{} {}", name, self.column_type(column.ty));
        if column.not_null {
            sql.push_str(" NOT NULL");
        }
        if let Some(default) = column.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(default);
        }
        if sole_key && self == Dialect::Sqlite {
            sql.push_str(" PRIMARY KEY");
        }
        sql
    }

    pub fn create_table(self, table: &TableSchema) -> String {
        let keys: Vec<&ColumnDef> = table.primary_key().collect();
        let inline_key = self == Dialect::Sqlite && keys.len() == 1;

        let mut parts: Vec<String> = table
            .columns
            .iter()
            .map(|c| self.column_definition(c, inline_key && c.primary_key))
            .collect();

        if !keys.is_empty() && !inline_key {
            let names: Vec<String> = keys.iter().map(|c| self.quote(c.name)).collect();
            parts.push(format!("PRIMARY KEY ({})", names.join(", ")));
        }

        let mut sql = format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.quote(table.name),
            parts.join(", ")
        );
        if self == Dialect::MySql {
            sql.push_str(" DEFAULT CHARSET=utf8mb4");
        }
        sql
    }

    pub fn add_column(self, table: &str, column: &ColumnDef) -> String {
        let mut definition = self.column_definition(column, false);
        if column.not_null && column.default.is_none() {
            if let Some(fill) = self.fill_default(column.ty) {
                definition.push_str(" DEFAULT ");
                definition.push_str(fill);
            }
        }
        format!(
            "ALTER TABLE {} ADD COLUMN {}",
            self.quote(table),
            definition
        )
    }

    pub fn create_index(self, table: &str, column: &ColumnDef) -> Option<String> {
        let name = column.index_name(table)?;
        let kind = match column.index {
            IndexKind::Unique => "UNIQUE INDEX",
            IndexKind::Index | IndexKind::None => "INDEX",
        };
        Some(format!(
            "CREATE {} {} ON {} ({})",
            kind,
            self.quote(&name),
            self.quote(table),
            self.quote(column.name)
        ))
    }

    /// Lists the live column names of the table bound as the only parameter.
    /// An empty result means the table does not exist.
    pub fn columns_query(self) -> String {
        match self {
            Dialect::MySql => format!(
                "SELECT CAST(column_name AS CHAR) FROM information_schema.columns \
                 WHERE table_schema = DATABASE() AND table_name = {}",
                self.first_param()
            ),
            Dialect::Postgres => format!(
                "SELECT column_name::text FROM information_schema.columns \
                 WHERE table_schema = current_schema() AND table_name = {}",
                self.first_param()
            ),
            Dialect::Sqlite => format!(
                "SELECT name FROM pragma_table_info({})",
                self.first_param()
            ),
        }
    }

    /// Lists the live index names of the table bound as the only parameter.
    pub fn indexes_query(self) -> String {
        match self {
            Dialect::MySql => format!(
                "SELECT DISTINCT CAST(index_name AS CHAR) FROM information_schema.statistics \
                 WHERE table_schema = DATABASE() AND table_name = {}",
                self.first_param()
            ),
            Dialect::Postgres => format!(
                "SELECT indexname::text FROM pg_indexes \
                 WHERE schemaname = current_schema() AND tablename = {}",
                self.first_param()
            ),
            Dialect::Sqlite => format!(
                "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = {}",
                self.first_param()
            ),
        }
    }

    /// Idempotent database creation, for dialects that support it.
    pub fn create_database(self, database: &str) -> Option<String> {
        match self {
            Dialect::MySql => Some(format!(
                "CREATE DATABASE IF NOT EXISTS {} DEFAULT CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci",
                self.quote(database)
            )),
            Dialect::Postgres | Dialect::Sqlite => None,
        }
    }
}
