use thiserror::Error;
use tpchgen_api::TableError;

/// Configuration errors, raised before any generation starts.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid scale factor {0}: must be a finite positive number")]
    InvalidScaleFactor(f64),
    #[error("scale factor {0} exceeds the supported table sizes")]
    ScaleFactorTooLarge(f64),
    #[error("order line range is empty or starts below 1")]
    InvalidLineRange,
    #[error(
        "scale factor {0} yields fewer than 4 suppliers, so parts cannot reference 4 distinct ones"
    )]
    TooFewSuppliers(f64),
}

/// Errors raised by column primitives, derived-field computations and table
/// generators. Fatal for the table being generated.
#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error("invalid range: lower bound {lower} exceeds upper bound {upper}")]
    InvalidRange { lower: String, upper: String },
    #[error("candidate set is empty")]
    EmptyCandidates,
    #[error("repeating sequence requires a positive modulus")]
    ZeroModulus,
    #[error("primary key range starting at {start} with length {length} overflows i64")]
    KeyRangeOverflow { start: i64, length: usize },
    #[error("date arithmetic overflow")]
    DateOverflow,
    #[error("parent row {parent} declares a negative child count")]
    NegativeChildCount { parent: usize },
    #[error("table {table}: expected {expected} rows, generated {actual}")]
    RowCountMismatch {
        table: &'static str,
        expected: u64,
        actual: u64,
    },
    #[error(
        "table {table}, column {column}: key {value} outside the range [{lower}, {upper}] of {referenced}"
    )]
    ForeignKeyOutOfRange {
        table: &'static str,
        column: &'static str,
        referenced: &'static str,
        value: i64,
        lower: i64,
        upper: i64,
    },
    #[error("part {part} is assigned {distinct} distinct suppliers instead of {expected}")]
    DuplicateSupplierAssignment {
        part: i64,
        distinct: usize,
        expected: usize,
    },
}

/// Error returned by a [`crate::sink::TableSink`] rejecting a table.
#[derive(Debug, Error, PartialEq)]
#[error("sink rejected table {table}: {reason}")]
pub struct SinkError {
    pub table: String,
    pub reason: String,
}

impl SinkError {
    /// Creates a new sink error for the given table.
    pub fn new(table: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            reason: reason.into(),
        }
    }
}

/// TpchGen Error type
#[derive(Debug, Error)]
pub enum TpchGenError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("table error: {0}")]
    Table(#[from] TableError),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}

/// TpchGen Result type
pub type TpchGenResult<T> = Result<T, TpchGenError>;
