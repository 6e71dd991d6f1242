//! This module contains the table container and its schema types.

mod column_def;
mod schema;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::column_def::{ColumnDef, ForeignKeyDef};
pub use self::schema::{TableFingerprint, TableSchema};
use crate::column::Column;
use crate::types::DataTypeKind;

/// Table related errors
#[derive(Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableError {
    #[error("table schema declares no columns")]
    EmptySchema,
    #[error("expected {expected} columns, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },
    #[error("column {column}: expected {expected} rows, got {actual}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("column {column}: expected {expected:?} storage, got {actual:?}")]
    ColumnTypeMismatch {
        column: String,
        expected: DataTypeKind,
        actual: DataTypeKind,
    },
    #[error("column {column} is not nullable but carries nulls")]
    NullInNonNullableColumn { column: String },
    #[error("row index {index} out of bounds for length {len}")]
    RowIndexOutOfBounds { index: usize, len: usize },
}

/// A fixed-order collection of named, typed columns of equal length.
///
/// A `Table` can only be built through [`Table::new`] or
/// [`Table::from_schema`], which enforce that every column matches its
/// [`ColumnDef`] and that all columns share one row count.
#[derive(Debug, Clone)]
pub struct Table {
    name: &'static str,
    fingerprint: TableFingerprint,
    columns: Vec<(ColumnDef, Column)>,
    row_count: usize,
}

impl Table {
    /// Builds a table from column definitions paired with materialized
    /// columns. The row count is taken from the first column.
    pub fn new(
        name: &'static str,
        fingerprint: TableFingerprint,
        columns: Vec<(ColumnDef, Column)>,
    ) -> Result<Self, TableError> {
        let Some((_, first)) = columns.first() else {
            return Err(TableError::EmptySchema);
        };
        let row_count = first.len();
        for (def, column) in &columns {
            if column.len() != row_count {
                return Err(TableError::ColumnLengthMismatch {
                    column: def.name.to_string(),
                    expected: row_count,
                    actual: column.len(),
                });
            }
            if column.data_type() != def.data_type {
                return Err(TableError::ColumnTypeMismatch {
                    column: def.name.to_string(),
                    expected: def.data_type,
                    actual: column.data_type(),
                });
            }
            if !def.nullable && column.has_nulls() {
                return Err(TableError::NullInNonNullableColumn {
                    column: def.name.to_string(),
                });
            }
        }
        Ok(Self {
            name,
            fingerprint,
            columns,
            row_count,
        })
    }

    /// Builds a table for schema `S`, zipping its column definitions with the
    /// provided columns in declaration order.
    pub fn from_schema<S: TableSchema>(columns: Vec<Column>) -> Result<Self, TableError> {
        let defs = S::columns();
        if defs.len() != columns.len() {
            return Err(TableError::ColumnCountMismatch {
                expected: defs.len(),
                actual: columns.len(),
            });
        }
        Self::new(
            S::table_name(),
            S::fingerprint(),
            defs.iter().copied().zip(columns).collect(),
        )
    }

    /// The table name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The fingerprint of the schema this table was built against.
    pub fn fingerprint(&self) -> TableFingerprint {
        self.fingerprint
    }

    /// The number of rows shared by every column.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Looks a column up by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(def, _)| def.name == name)
            .map(|(_, column)| column)
    }

    /// Iterates the columns in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = (&ColumnDef, &Column)> {
        self.columns.iter().map(|(def, column)| (def, column))
    }
}
