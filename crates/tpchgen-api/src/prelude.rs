//! Re-exports of the most commonly used types of this crate.

pub use crate::column::{Column, ColumnValues};
pub use crate::table::{
    ColumnDef, ForeignKeyDef, Table, TableError, TableFingerprint, TableSchema,
};
pub use crate::types::{DataTypeKind, Date};
pub use crate::value::Value;
