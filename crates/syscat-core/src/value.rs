//! Owned wire values and the conversion trait from cell to field.
//!
//! A cursor surfaces every cell as a [`SqlValue`]; record constructors pull
//! fields out with [`FromSqlValue`]. Integer conversions are tolerant across
//! the integer family (drivers differ in width fidelity; SQLite hands every
//! integer back as 64-bit) but always range-checked.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One cell as produced by a cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Null,
    Bit(bool),
    TinyInt(u8),
    SmallInt(i16),
    Int(i32),
    BigInt(i64),
    Float(f64),
    NVarchar(String),
    DateTime(NaiveDateTime),
    Guid(Uuid),
    VarBinary(Vec<u8>),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bit(_) => "bit",
            SqlValue::TinyInt(_) => "tinyint",
            SqlValue::SmallInt(_) => "smallint",
            SqlValue::Int(_) => "int",
            SqlValue::BigInt(_) => "bigint",
            SqlValue::Float(_) => "float",
            SqlValue::NVarchar(_) => "nvarchar",
            SqlValue::DateTime(_) => "datetime",
            SqlValue::Guid(_) => "uniqueidentifier",
            SqlValue::VarBinary(_) => "varbinary",
        }
    }

    /// The value as a 64-bit integer, if it belongs to the integer family.
    fn integer(&self) -> Option<i64> {
        match *self {
            SqlValue::TinyInt(v) => Some(v as i64),
            SqlValue::SmallInt(v) => Some(v as i64),
            SqlValue::Int(v) => Some(v as i64),
            SqlValue::BigInt(v) => Some(v),
            _ => None,
        }
    }
}

/// Conversion failure before view/column context is attached (the row layer
/// adds that).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("unexpected NULL")]
    UnexpectedNull,

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("value {value} out of range for {expected}")]
    OutOfRange { expected: &'static str, value: i64 },
}

/// Converts one owned cell value into a typed field.
///
/// Non-`Option` implementations reject NULL with
/// [`ValueError::UnexpectedNull`]; `Option<V>` maps NULL to `None`.
pub trait FromSqlValue: Sized {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError>;
}

impl<V: FromSqlValue> FromSqlValue for Option<V> {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        if value.is_null() {
            Ok(None)
        } else {
            V::from_sql_value(value).map(Some)
        }
    }
}

impl FromSqlValue for SqlValue {
    /// Raw access, used for `sql_variant` columns.
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        if value.is_null() {
            Err(ValueError::UnexpectedNull)
        } else {
            Ok(value)
        }
    }
}

impl FromSqlValue for bool {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Null => Err(ValueError::UnexpectedNull),
            SqlValue::Bit(b) => Ok(b),
            other => match other.integer() {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                Some(v) => Err(ValueError::OutOfRange { expected: "bit", value: v }),
                None => Err(ValueError::TypeMismatch {
                    expected: "bit",
                    found: other.type_name(),
                }),
            },
        }
    }
}

macro_rules! integer_from_sql {
    ($target:ty, $name:literal) => {
        impl FromSqlValue for $target {
            fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
                match value {
                    SqlValue::Null => Err(ValueError::UnexpectedNull),
                    ref v => match v.integer() {
                        Some(i) => <$target>::try_from(i)
                            .map_err(|_| ValueError::OutOfRange { expected: $name, value: i }),
                        None => Err(ValueError::TypeMismatch {
                            expected: $name,
                            found: v.type_name(),
                        }),
                    },
                }
            }
        }
    };
}

integer_from_sql!(u8, "tinyint");
integer_from_sql!(i16, "smallint");
integer_from_sql!(i32, "int");
integer_from_sql!(i64, "bigint");

impl FromSqlValue for f64 {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Null => Err(ValueError::UnexpectedNull),
            SqlValue::Float(f) => Ok(f),
            ref v => match v.integer() {
                Some(i) => Ok(i as f64),
                None => Err(ValueError::TypeMismatch {
                    expected: "float",
                    found: v.type_name(),
                }),
            },
        }
    }
}

impl FromSqlValue for String {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Null => Err(ValueError::UnexpectedNull),
            SqlValue::NVarchar(s) => Ok(s),
            other => Err(ValueError::TypeMismatch {
                expected: "nvarchar",
                found: other.type_name(),
            }),
        }
    }
}

impl FromSqlValue for NaiveDateTime {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Null => Err(ValueError::UnexpectedNull),
            SqlValue::DateTime(dt) => Ok(dt),
            // Drivers without a native datetime type hand back ISO-8601 text.
            SqlValue::NVarchar(ref s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
                .map_err(|_| ValueError::TypeMismatch {
                    expected: "datetime",
                    found: "nvarchar",
                }),
            other => Err(ValueError::TypeMismatch {
                expected: "datetime",
                found: other.type_name(),
            }),
        }
    }
}

impl FromSqlValue for Uuid {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Null => Err(ValueError::UnexpectedNull),
            SqlValue::Guid(g) => Ok(g),
            SqlValue::NVarchar(ref s) => Uuid::parse_str(s).map_err(|_| ValueError::TypeMismatch {
                expected: "uniqueidentifier",
                found: "nvarchar",
            }),
            SqlValue::VarBinary(ref b) => {
                Uuid::from_slice(b).map_err(|_| ValueError::TypeMismatch {
                    expected: "uniqueidentifier",
                    found: "varbinary",
                })
            }
            other => Err(ValueError::TypeMismatch {
                expected: "uniqueidentifier",
                found: other.type_name(),
            }),
        }
    }
}

impl FromSqlValue for Vec<u8> {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Null => Err(ValueError::UnexpectedNull),
            SqlValue::VarBinary(b) => Ok(b),
            other => Err(ValueError::TypeMismatch {
                expected: "varbinary",
                found: other.type_name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn integers_widen_and_narrow_within_range() {
        assert_eq!(i32::from_sql_value(SqlValue::BigInt(42)).unwrap(), 42);
        assert_eq!(i64::from_sql_value(SqlValue::TinyInt(7)).unwrap(), 7);
        assert_eq!(u8::from_sql_value(SqlValue::Int(200)).unwrap(), 200);
    }

    #[test]
    fn narrowing_out_of_range_fails() {
        let err = u8::from_sql_value(SqlValue::Int(300)).unwrap_err();
        assert_eq!(err, ValueError::OutOfRange { expected: "tinyint", value: 300 });
    }

    #[test]
    fn bool_accepts_bit_and_zero_one() {
        assert!(bool::from_sql_value(SqlValue::Bit(true)).unwrap());
        assert!(!bool::from_sql_value(SqlValue::BigInt(0)).unwrap());
        assert!(bool::from_sql_value(SqlValue::Int(1)).unwrap());
        assert!(bool::from_sql_value(SqlValue::Int(2)).is_err());
    }

    #[test]
    fn null_maps_to_none_for_option() {
        let v: Option<String> = FromSqlValue::from_sql_value(SqlValue::Null).unwrap();
        assert_eq!(v, None);
    }

    #[test]
    fn null_rejected_for_non_option() {
        let err = String::from_sql_value(SqlValue::Null).unwrap_err();
        assert_eq!(err, ValueError::UnexpectedNull);
    }

    #[test]
    fn datetime_parses_iso_text() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let dt =
            NaiveDateTime::from_sql_value(SqlValue::NVarchar("2024-03-01 10:30:00".into()))
                .unwrap();
        assert_eq!(dt, expected);
        let dt =
            NaiveDateTime::from_sql_value(SqlValue::NVarchar("2024-03-01T10:30:00".into()))
                .unwrap();
        assert_eq!(dt, expected);
    }

    #[test]
    fn guid_accepts_text_and_blob() {
        let g = Uuid::parse_str("6f9619ff-8b86-d011-b42d-00c04fc964ff").unwrap();
        assert_eq!(
            Uuid::from_sql_value(SqlValue::NVarchar(g.to_string())).unwrap(),
            g
        );
        assert_eq!(
            Uuid::from_sql_value(SqlValue::VarBinary(g.as_bytes().to_vec())).unwrap(),
            g
        );
        assert!(Uuid::from_sql_value(SqlValue::VarBinary(vec![1, 2, 3])).is_err());
    }

    #[test]
    fn string_rejects_other_families() {
        let err = String::from_sql_value(SqlValue::Int(5)).unwrap_err();
        assert_eq!(err, ValueError::TypeMismatch { expected: "nvarchar", found: "int" });
    }
}
