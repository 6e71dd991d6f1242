//! This module exposes the scalar data types used in generated tables.

mod date;

use serde::{Deserialize, Serialize};

pub use self::date::Date;

/// An enumeration of all supported column data type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataTypeKind {
    Int32,
    Int64,
    Decimal,
    Text,
    Date,
}
