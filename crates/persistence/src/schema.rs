//! Declarative table schemas.
//!
//! Every record type stored by the forum declares a [`TableSchema`] as a
//! constant. The synchronization step reads these declarations and reconciles
//! the live database against them; nothing else in the crate knows about the
//! business entities.

use std::collections::HashSet;

use crate::error::{PersistenceError, PersistenceResult};

/// Portable column types. Each dialect renders its own SQL type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Fixed-length character column.
    Char(u32),
    Varchar(u32),
    Text,
    /// Long text such as topic and reply bodies.
    MediumText,
    Int,
    BigInt,
    Bool,
    Blob,
}

impl ColumnType {
    pub fn is_integer(self) -> bool {
        matches!(self, ColumnType::Int | ColumnType::BigInt)
    }
}

/// Secondary index declared on a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    None,
    Index,
    Unique,
}

/// One column of a [`TableSchema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub not_null: bool,
    pub primary_key: bool,
    pub auto_increment: bool,
    /// Raw SQL default expression, rendered verbatim.
    pub default: Option<&'static str>,
    pub index: IndexKind,
}

impl ColumnDef {
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            not_null: false,
            primary_key: false,
            auto_increment: false,
            default: None,
            index: IndexKind::None,
        }
    }

    pub const fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Primary key columns are always `NOT NULL`.
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.not_null = true;
        self
    }

    pub const fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub const fn default_value(mut self, expr: &'static str) -> Self {
        self.default = Some(expr);
        self
    }

    pub const fn indexed(mut self) -> Self {
        self.index = IndexKind::Index;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.index = IndexKind::Unique;
        self
    }

    /// Name of the secondary index backing this column, if it declares one.
    pub fn index_name(&self, table: &str) -> Option<String> {
        match self.index {
            IndexKind::None => None,
            IndexKind::Index => Some(format!("idx_{}_{}", table, self.name)),
            IndexKind::Unique => Some(format!("uqe_{}_{}", table, self.name)),
        }
    }
}

/// The declared storage shape of one record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableSchema {
    pub const fn new(name: &'static str, columns: &'static [ColumnDef]) -> Self {
        Self { name, columns }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn primary_key(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| c.primary_key)
    }

    /// Checks the declaration is something every supported dialect can create.
    pub fn validate(&self) -> PersistenceResult<()> {
        if !is_identifier(self.name) {
            return Err(PersistenceError::invalid_schema(
                self.name,
                "table name must be a non-empty [A-Za-z0-9_] identifier",
            ));
        }
        if self.columns.is_empty() {
            return Err(PersistenceError::invalid_schema(
                self.name,
                "table declares no columns",
            ));
        }

        let mut seen = HashSet::new();
        for column in self.columns {
            if !is_identifier(column.name) {
                return Err(PersistenceError::invalid_schema(
                    self.name,
                    format!("column name '{}' is not a valid identifier", column.name),
                ));
            }
            if !seen.insert(column.name.to_ascii_lowercase()) {
                return Err(PersistenceError::invalid_schema(
                    self.name,
                    format!("column '{}' is declared twice", column.name),
                ));
            }
            if let ColumnType::Char(0) | ColumnType::Varchar(0) = column.ty {
                return Err(PersistenceError::invalid_schema(
                    self.name,
                    format!("column '{}' has zero length", column.name),
                ));
            }
        }

        let auto: Vec<_> = self.columns.iter().filter(|c| c.auto_increment).collect();
        if auto.len() > 1 {
            return Err(PersistenceError::invalid_schema(
                self.name,
                "at most one auto-increment column is allowed",
            ));
        }
        if let Some(column) = auto.first() {
            if !column.ty.is_integer() || !column.primary_key || self.primary_key().count() != 1
            {
                return Err(PersistenceError::invalid_schema(
                    self.name,
                    format!(
                        "auto-increment column '{}' must be the sole integer primary key",
                        column.name
                    ),
                ));
            }
        }

        Ok(())
    }
}

/// `[A-Za-z0-9_]+`, not starting with a digit.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
