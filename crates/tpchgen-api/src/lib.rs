//! # tpchgen-api
//!
//! The columnar data model produced by the `tpchgen` engine and consumed by
//! output sinks.
//!
//! A [`Table`](crate::prelude::Table) is a fixed-order collection of typed
//! [`Column`](crate::prelude::Column)s described by a static
//! [`TableSchema`](crate::prelude::TableSchema). Row scalars are carried by
//! [`Value`](crate::prelude::Value).
//!
//! You can import all the useful types and traits through the prelude module:
//!
//! ```rust
//! use tpchgen_api::prelude::*;
//! ```

mod column;
pub mod prelude;
mod table;
mod types;
mod value;

pub use self::column::{Column, ColumnValues};
pub use self::table::{ColumnDef, ForeignKeyDef, Table, TableError, TableFingerprint, TableSchema};
pub use self::types::{DataTypeKind, Date};
pub use self::value::Value;
