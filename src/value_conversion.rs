//! Conversions between `sea_query::Value` and `may_postgres`.
//!
//! Statements are built with SeaQuery, so parameters arrive as `Value`s and
//! have to be turned into `ToSql` trait objects before they reach the driver.
//! Result rows travel the other way: each PostgreSQL column is decoded into the
//! matching `Value` variant so that entity mappings never touch driver types.

use crate::error::{GpError, GpResult};
use crate::row::Row;
use chrono::{NaiveDate, NaiveDateTime};
use may_postgres::types::{ToSql, Type};
use rust_decimal::Decimal;
use sea_query::Value;

/// Extract the payload of a non-null `Value` as `T`.
pub(crate) fn extract<T: sea_query::ValueType>(value: &Value, column: &str) -> GpResult<T> {
    <T as sea_query::ValueType>::try_from(value.clone()).map_err(|_| GpError::TypeMismatch {
        column: column.to_string(),
        expected: <T as sea_query::ValueType>::type_name(),
        actual: format!("{value:?}"),
    })
}

fn to_sql_param(value: &Value) -> GpResult<Box<dyn ToSql>> {
    let param: Box<dyn ToSql> = match value {
        Value::Bool(None) => Box::new(None::<bool>),
        Value::Bool(Some(_)) => Box::new(extract::<bool>(value, "$param")?),
        Value::TinyInt(None) | Value::SmallInt(None) => Box::new(None::<i16>),
        Value::TinyInt(Some(_)) => Box::new(i16::from(extract::<i8>(value, "$param")?)),
        Value::SmallInt(Some(_)) => Box::new(extract::<i16>(value, "$param")?),
        Value::Int(None) => Box::new(None::<i32>),
        Value::Int(Some(_)) => Box::new(extract::<i32>(value, "$param")?),
        Value::BigInt(None) => Box::new(None::<i64>),
        Value::BigInt(Some(_)) => Box::new(extract::<i64>(value, "$param")?),
        Value::Float(None) => Box::new(None::<f32>),
        Value::Float(Some(_)) => Box::new(extract::<f32>(value, "$param")?),
        Value::Double(None) => Box::new(None::<f64>),
        Value::Double(Some(_)) => Box::new(extract::<f64>(value, "$param")?),
        Value::String(None) => Box::new(None::<String>),
        Value::String(Some(_)) => Box::new(extract::<String>(value, "$param")?),
        Value::Decimal(None) => Box::new(None::<Decimal>),
        Value::Decimal(Some(_)) => Box::new(extract::<Decimal>(value, "$param")?),
        Value::ChronoDateTime(None) => Box::new(None::<NaiveDateTime>),
        Value::ChronoDateTime(Some(_)) => Box::new(extract::<NaiveDateTime>(value, "$param")?),
        Value::ChronoDate(None) => Box::new(None::<NaiveDate>),
        Value::ChronoDate(Some(_)) => Box::new(extract::<NaiveDate>(value, "$param")?),
        _ => {
            return Err(GpError::QueryError(format!(
                "Unsupported value type in query: {value:?}"
            )))
        }
    };
    Ok(param)
}

/// Convert SeaQuery values to `may_postgres` parameters and run `f` with them.
///
/// The converted parameters borrow from storage owned by this function, so
/// they are only valid inside the closure.
///
/// # Errors
///
/// Returns `GpError::QueryError` if a value has no PostgreSQL mapping, or
/// whatever `f` returns.
pub fn with_converted_params<F, R>(values: &[Value], f: F) -> GpResult<R>
where
    F: FnOnce(&[&dyn ToSql]) -> GpResult<R>,
{
    let owned = values
        .iter()
        .map(to_sql_param)
        .collect::<GpResult<Vec<_>>>()?;
    let params: Vec<&dyn ToSql> = owned.iter().map(|p| p.as_ref()).collect();
    f(&params)
}

fn decode_column(row: &may_postgres::Row, idx: usize, ty: &Type, name: &str) -> GpResult<Value> {
    let decode_err = |e: may_postgres::Error| GpError::TypeMismatch {
        column: name.to_string(),
        expected: ty.to_string(),
        actual: e.to_string(),
    };

    let value = if *ty == Type::BOOL {
        Value::from(row.try_get::<usize, Option<bool>>(idx).map_err(decode_err)?)
    } else if *ty == Type::INT2 {
        Value::from(row.try_get::<usize, Option<i16>>(idx).map_err(decode_err)?)
    } else if *ty == Type::INT4 {
        Value::from(row.try_get::<usize, Option<i32>>(idx).map_err(decode_err)?)
    } else if *ty == Type::INT8 {
        Value::from(row.try_get::<usize, Option<i64>>(idx).map_err(decode_err)?)
    } else if *ty == Type::FLOAT4 {
        Value::from(row.try_get::<usize, Option<f32>>(idx).map_err(decode_err)?)
    } else if *ty == Type::FLOAT8 {
        Value::from(row.try_get::<usize, Option<f64>>(idx).map_err(decode_err)?)
    } else if *ty == Type::NUMERIC {
        Value::from(row.try_get::<usize, Option<Decimal>>(idx).map_err(decode_err)?)
    } else if *ty == Type::TIMESTAMP {
        Value::from(
            row.try_get::<usize, Option<NaiveDateTime>>(idx)
                .map_err(decode_err)?,
        )
    } else if *ty == Type::DATE {
        Value::from(row.try_get::<usize, Option<NaiveDate>>(idx).map_err(decode_err)?)
    } else if *ty == Type::TEXT || *ty == Type::VARCHAR || *ty == Type::BPCHAR || *ty == Type::NAME
    {
        Value::from(row.try_get::<usize, Option<String>>(idx).map_err(decode_err)?)
    } else {
        return Err(GpError::TypeMismatch {
            column: name.to_string(),
            expected: "a mapped PostgreSQL type".to_string(),
            actual: ty.to_string(),
        });
    };
    Ok(value)
}

/// Decode a driver row into a [`Row`].
///
/// # Errors
///
/// Returns `GpError::TypeMismatch` for column types the GP schema never uses.
pub fn decode_row(row: &may_postgres::Row) -> GpResult<Row> {
    row.columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let value = decode_column(row, idx, column.type_(), column.name())?;
            Ok((column.name().to_string(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_mapped_values() {
        let values = vec![
            Value::from("ITEM-1"),
            Value::from(42i32),
            Value::from(Decimal::new(12345, 2)),
            Value::from(true),
            Value::from(None::<Decimal>),
            Value::from(None::<String>),
        ];
        let count = with_converted_params(&values, |params| Ok(params.len())).unwrap();
        assert_eq!(count, 6);
    }

    #[test]
    fn test_rejects_unmapped_values() {
        let values = vec![Value::from(vec![1u8, 2, 3])];
        let err = with_converted_params(&values, |params| Ok(params.len())).unwrap_err();
        assert!(matches!(err, GpError::QueryError(msg) if msg.contains("Unsupported")));
    }

    #[test]
    fn test_extract_reports_type_mismatch() {
        let err = extract::<i32>(&Value::from("abc"), "QTYTYPE").unwrap_err();
        match err {
            GpError::TypeMismatch { column, .. } => assert_eq!(column, "QTYTYPE"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(extract::<i32>(&Value::from(7i32), "QTYTYPE").unwrap(), 7);
    }
}
