use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Date;

/// A generic wrapper enum holding any scalar a generated table can carry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    Int32(i32),
    Int64(i64),
    Decimal(Decimal),
    Text(String),
    Date(Date),
    Null,
}

// macro rules for implementing conversions and accessors for Value variants
macro_rules! impl_conv_for_value {
    ($variant:ident, $ty:ty, $name:ident, $test_name:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }

        impl Value {
            /// Attempts to extract a reference to the inner value if it matches the variant.
            pub fn $name(&self) -> Option<&$ty> {
                if let Value::$variant(v) = self {
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
            fn test_value_conversion() {
                let value_instance: $ty = Default::default();
                let value: Value = value_instance.clone().into();
                assert_eq!(value.$name(), Some(&value_instance));
            }
        }
    };
}

impl_conv_for_value!(Int32, i32, as_int32, tests_int32);
impl_conv_for_value!(Int64, i64, as_int64, tests_int64);
impl_conv_for_value!(Decimal, Decimal, as_decimal, tests_decimal);
impl_conv_for_value!(Text, String, as_text, tests_text);
impl_conv_for_value!(Date, Date, as_date, tests_date);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl Value {
    /// Checks if the value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int32(_) => "Int32",
            Value::Int64(_) => "Int64",
            Value::Decimal(_) => "Decimal",
            Value::Text(_) => "Text",
            Value::Date(_) => "Date",
            Value::Null => "Null",
        }
    }
}
