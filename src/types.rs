//! Column storage types and the conversions between Rust field types and
//! `sea_query::Value`.
//!
//! The GP schema stores text in fixed-width, space-padded columns, money and
//! quantities as `NUMERIC(19,5)`, and insertable sequence positions as scaled
//! integers. [`ColumnValue`] is the one place those storage conventions are
//! applied, on both the bind and the read side.

use crate::error::{GpError, GpResult};
use crate::ordinal::{self, OrdinalValue};
use crate::value_conversion::extract;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use sea_query::Value;
use std::fmt;

/// Storage type of a mapped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Fixed-width character column. Padding is stripped on read.
    StripString(u32),
    Integer,
    /// `NUMERIC(precision, scale)`
    Numeric(u32, u32),
    DateTime,
    Boolean,
    /// Integer column holding a position scaled by the ordinal codec.
    Ordinal,
}

impl ColumnType {
    /// A typed SQL null for this storage type.
    pub fn null(&self) -> Value {
        match self {
            ColumnType::StripString(_) => Value::from(None::<String>),
            ColumnType::Integer | ColumnType::Ordinal => Value::from(None::<i32>),
            ColumnType::Numeric(..) => Value::from(None::<Decimal>),
            ColumnType::DateTime => Value::from(None::<NaiveDateTime>),
            ColumnType::Boolean => Value::from(None::<bool>),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::StripString(len) => write!(f, "char({len})"),
            ColumnType::Integer | ColumnType::Ordinal => write!(f, "integer"),
            ColumnType::Numeric(p, s) => write!(f, "numeric({p},{s})"),
            ColumnType::DateTime => write!(f, "timestamp"),
            ColumnType::Boolean => write!(f, "boolean"),
        }
    }
}

/// Conversion between a field type and its column representation.
pub trait ColumnValue: Sized {
    /// Value bound for this field.
    ///
    /// # Errors
    ///
    /// Returns `GpError::InvalidOrdinalValue` when an ordinal does not fit the
    /// storage integer.
    fn to_value(&self, column_type: ColumnType) -> GpResult<Value>;

    /// Read the field back from a result value.
    ///
    /// # Errors
    ///
    /// Returns `GpError::NullValue` for a null in a non-optional field and
    /// `GpError::TypeMismatch` when the value cannot represent the field.
    fn from_value(value: &Value, column_type: ColumnType, column: &str) -> GpResult<Self>;
}

/// Whether `value` is a SQL null of any of the variants this crate produces.
pub fn is_null(value: &Value) -> bool {
    matches!(
        value,
        Value::Bool(None)
            | Value::TinyInt(None)
            | Value::SmallInt(None)
            | Value::Int(None)
            | Value::BigInt(None)
            | Value::Float(None)
            | Value::Double(None)
            | Value::String(None)
            | Value::Decimal(None)
            | Value::ChronoDateTime(None)
            | Value::ChronoDate(None)
    )
}

fn mismatch(column: &str, expected: &str, value: &Value) -> GpError {
    GpError::TypeMismatch {
        column: column.to_string(),
        expected: expected.to_string(),
        actual: format!("{value:?}"),
    }
}

fn non_null(value: &Value, column: &str) -> GpResult<()> {
    if is_null(value) {
        Err(GpError::NullValue(column.to_string()))
    } else {
        Ok(())
    }
}

/// Read any integer-valued column as `i64`.
fn i64_from_value(value: &Value, column: &str) -> GpResult<i64> {
    non_null(value, column)?;
    match value {
        Value::TinyInt(Some(_)) => Ok(i64::from(extract::<i8>(value, column)?)),
        Value::SmallInt(Some(_)) => Ok(i64::from(extract::<i16>(value, column)?)),
        Value::Int(Some(_)) => Ok(i64::from(extract::<i32>(value, column)?)),
        Value::BigInt(Some(_)) => extract::<i64>(value, column),
        _ => Err(mismatch(column, "integer", value)),
    }
}

/// Read any integer-valued column as `i32`, rejecting values that do not fit.
pub fn i32_from_value(value: &Value, column: &str) -> GpResult<i32> {
    let wide = i64_from_value(value, column)?;
    i32::try_from(wide).map_err(|_| mismatch(column, "i32", value))
}

/// Read a numeric or integer column as an exact decimal.
pub fn decimal_from_value(value: &Value, column: &str) -> GpResult<Decimal> {
    non_null(value, column)?;
    match value {
        Value::Decimal(Some(_)) => extract::<Decimal>(value, column),
        Value::TinyInt(Some(_))
        | Value::SmallInt(Some(_))
        | Value::Int(Some(_))
        | Value::BigInt(Some(_)) => Ok(Decimal::from(i64_from_value(value, column)?)),
        _ => Err(mismatch(column, "Decimal", value)),
    }
}

impl ColumnValue for String {
    fn to_value(&self, _column_type: ColumnType) -> GpResult<Value> {
        Ok(Value::from(self.clone()))
    }

    fn from_value(value: &Value, column_type: ColumnType, column: &str) -> GpResult<Self> {
        non_null(value, column)?;
        let raw = extract::<String>(value, column)?;
        Ok(match column_type {
            ColumnType::StripString(_) => raw.trim().to_string(),
            _ => raw,
        })
    }
}

impl ColumnValue for i32 {
    fn to_value(&self, _column_type: ColumnType) -> GpResult<Value> {
        Ok(Value::from(*self))
    }

    fn from_value(value: &Value, _column_type: ColumnType, column: &str) -> GpResult<Self> {
        i32_from_value(value, column)
    }
}

impl ColumnValue for Decimal {
    fn to_value(&self, _column_type: ColumnType) -> GpResult<Value> {
        Ok(Value::from(*self))
    }

    fn from_value(value: &Value, _column_type: ColumnType, column: &str) -> GpResult<Self> {
        decimal_from_value(value, column)
    }
}

impl ColumnValue for NaiveDateTime {
    fn to_value(&self, _column_type: ColumnType) -> GpResult<Value> {
        Ok(Value::from(*self))
    }

    fn from_value(value: &Value, _column_type: ColumnType, column: &str) -> GpResult<Self> {
        non_null(value, column)?;
        match value {
            Value::ChronoDateTime(Some(_)) => extract::<NaiveDateTime>(value, column),
            Value::ChronoDate(Some(_)) => {
                Ok(extract::<NaiveDate>(value, column)?.and_time(NaiveTime::MIN))
            }
            _ => Err(mismatch(column, "NaiveDateTime", value)),
        }
    }
}

impl ColumnValue for bool {
    fn to_value(&self, column_type: ColumnType) -> GpResult<Value> {
        Ok(match column_type {
            ColumnType::Integer => Value::from(i32::from(*self)),
            _ => Value::from(*self),
        })
    }

    fn from_value(value: &Value, _column_type: ColumnType, column: &str) -> GpResult<Self> {
        non_null(value, column)?;
        match value {
            Value::Bool(Some(_)) => extract::<bool>(value, column),
            _ => Ok(i64_from_value(value, column)? != 0),
        }
    }
}

impl ColumnValue for OrdinalValue {
    fn to_value(&self, _column_type: ColumnType) -> GpResult<Value> {
        let stored = ordinal::encode(self)?;
        let stored = i32::try_from(stored).map_err(|_| {
            GpError::InvalidOrdinalValue(format!("{self} does not fit an integer column"))
        })?;
        Ok(Value::from(stored))
    }

    fn from_value(value: &Value, _column_type: ColumnType, column: &str) -> GpResult<Self> {
        Ok(ordinal::decode(i64_from_value(value, column)?))
    }
}

impl<T: ColumnValue> ColumnValue for Option<T> {
    fn to_value(&self, column_type: ColumnType) -> GpResult<Value> {
        match self {
            Some(v) => v.to_value(column_type),
            None => Ok(column_type.null()),
        }
    }

    fn from_value(value: &Value, column_type: ColumnType, column: &str) -> GpResult<Self> {
        if is_null(value) {
            Ok(None)
        } else {
            T::from_value(value, column_type, column).map(Some)
        }
    }
}
