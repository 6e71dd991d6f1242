//! Columnar value storage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::table::TableError;
use crate::types::{DataTypeKind, Date};
use crate::value::Value;

/// Typed, densely-indexed storage backing one [`Column`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnValues {
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Decimal(Vec<Decimal>),
    Text(Vec<String>),
    Date(Vec<Date>),
}

impl ColumnValues {
    /// Number of rows held by this storage.
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Int32(v) => v.len(),
            ColumnValues::Int64(v) => v.len(),
            ColumnValues::Decimal(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
            ColumnValues::Date(v) => v.len(),
        }
    }

    /// Checks whether the storage holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The data type kind of the stored values.
    pub fn data_type(&self) -> DataTypeKind {
        match self {
            ColumnValues::Int32(_) => DataTypeKind::Int32,
            ColumnValues::Int64(_) => DataTypeKind::Int64,
            ColumnValues::Decimal(_) => DataTypeKind::Decimal,
            ColumnValues::Text(_) => DataTypeKind::Text,
            ColumnValues::Date(_) => DataTypeKind::Date,
        }
    }
}

/// A homogeneously-typed, densely-indexed sequence of values, optionally
/// nullable through a validity mask.
///
/// No generator in this workspace produces nulls, but sinks downstream may
/// require nullable containers, so the mask is part of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    values: ColumnValues,
    validity: Option<Vec<bool>>,
}

// macro rules for implementing From<Vec<T>> and slice accessors per storage type
macro_rules! impl_column_storage {
    ($variant:ident, $ty:ty, $accessor:ident, $test_name:ident) => {
        impl From<Vec<$ty>> for Column {
            fn from(values: Vec<$ty>) -> Self {
                Column {
                    values: ColumnValues::$variant(values),
                    validity: None,
                }
            }
        }

        impl Column {
            /// Attempts to view the column storage as a slice of the matching type.
            pub fn $accessor(&self) -> Option<&[$ty]> {
                if let ColumnValues::$variant(v) = &self.values {
                    Some(v)
                } else {
                    None
                }
            }
        }

        #[cfg(test)]
        mod $test_name {
            use super::*;

            #[test]
            fn test_column_storage_round_trip() {
                let values: Vec<$ty> = vec![Default::default(); 3];
                let column = Column::from(values.clone());
                assert_eq!(column.$accessor(), Some(values.as_slice()));
                assert_eq!(column.len(), 3);
            }
        }
    };
}

impl_column_storage!(Int32, i32, as_int32s, tests_int32_storage);
impl_column_storage!(Int64, i64, as_int64s, tests_int64_storage);
impl_column_storage!(Decimal, Decimal, as_decimals, tests_decimal_storage);
impl_column_storage!(Text, String, as_texts, tests_text_storage);
impl_column_storage!(Date, Date, as_dates, tests_date_storage);

impl Column {
    /// Number of rows in the column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks whether the column holds no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The data type kind of the column.
    pub fn data_type(&self) -> DataTypeKind {
        self.values.data_type()
    }

    /// The underlying typed storage.
    pub fn values(&self) -> &ColumnValues {
        &self.values
    }

    /// Attaches a validity mask to the column. `false` entries read as null.
    pub fn with_validity(mut self, validity: Vec<bool>) -> Result<Self, TableError> {
        if validity.len() != self.len() {
            return Err(TableError::ColumnLengthMismatch {
                column: "<validity>".to_string(),
                expected: self.len(),
                actual: validity.len(),
            });
        }
        self.validity = Some(validity);
        Ok(self)
    }

    /// Checks whether any row of the column reads as null.
    pub fn has_nulls(&self) -> bool {
        self.validity
            .as_ref()
            .is_some_and(|mask| mask.iter().any(|valid| !valid))
    }

    /// Reads one row as a [`Value`], honouring the validity mask.
    pub fn value(&self, row: usize) -> Result<Value, TableError> {
        if row >= self.len() {
            return Err(TableError::RowIndexOutOfBounds {
                index: row,
                len: self.len(),
            });
        }
        if let Some(mask) = &self.validity
            && !mask[row]
        {
            return Ok(Value::Null);
        }
        Ok(match &self.values {
            ColumnValues::Int32(v) => Value::Int32(v[row]),
            ColumnValues::Int64(v) => Value::Int64(v[row]),
            ColumnValues::Decimal(v) => Value::Decimal(v[row]),
            ColumnValues::Text(v) => Value::Text(v[row].clone()),
            ColumnValues::Date(v) => Value::Date(v[row]),
        })
    }

    /// Builds a new column by picking rows of `self` at the given indices,
    /// in order and with repetition.
    ///
    /// This is the index-expansion step behind parent/child fan-out: the
    /// caller derives a flat child-to-parent index mapping and gathers every
    /// parent column through it.
    pub fn gather(&self, indices: &[usize]) -> Result<Column, TableError> {
        let len = self.len();
        if let Some(&bad) = indices.iter().find(|&&index| index >= len) {
            return Err(TableError::RowIndexOutOfBounds { index: bad, len });
        }
        let values = match &self.values {
            ColumnValues::Int32(v) => {
                ColumnValues::Int32(indices.iter().map(|&i| v[i]).collect())
            }
            ColumnValues::Int64(v) => {
                ColumnValues::Int64(indices.iter().map(|&i| v[i]).collect())
            }
            ColumnValues::Decimal(v) => {
                ColumnValues::Decimal(indices.iter().map(|&i| v[i]).collect())
            }
            ColumnValues::Text(v) => {
                ColumnValues::Text(indices.iter().map(|&i| v[i].clone()).collect())
            }
            ColumnValues::Date(v) => {
                ColumnValues::Date(indices.iter().map(|&i| v[i]).collect())
            }
        };
        let validity = self
            .validity
            .as_ref()
            .map(|mask| indices.iter().map(|&i| mask[i]).collect());
        Ok(Column { values, validity })
    }
}
