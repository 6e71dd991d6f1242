use xxhash_rust::xxh3::xxh3_64;

use crate::table::column_def::{ColumnDef, ForeignKeyDef};

/// A type representing a unique fingerprint for a table schema.
pub type TableFingerprint = u64;

/// Table schema representation.
///
/// It is used to define the structure of a generated table: declaration-order
/// column definitions, the primary key and any foreign keys.
pub trait TableSchema
where
    Self: 'static,
{
    /// Returns the name of the table.
    fn table_name() -> &'static str;

    /// Returns the column definitions of the table.
    fn columns() -> &'static [ColumnDef];

    /// Returns the name of the primary key column.
    fn primary_key() -> &'static str;

    /// Returns the columns carrying a foreign key, with their definitions.
    fn foreign_keys() -> Vec<(&'static str, ForeignKeyDef)> {
        Self::columns()
            .iter()
            .filter_map(|def| def.foreign_key.map(|fk| (def.name, fk)))
            .collect()
    }

    /// Returns the fingerprint of the table schema, derived from the table
    /// name and column layout.
    fn fingerprint() -> TableFingerprint {
        let mut buf = Vec::new();
        buf.extend_from_slice(Self::table_name().as_bytes());
        for def in Self::columns() {
            buf.push(0);
            buf.extend_from_slice(def.name.as_bytes());
            buf.push(def.data_type as u8);
            buf.push(u8::from(def.nullable));
        }
        xxh3_64(&buf)
    }
}
