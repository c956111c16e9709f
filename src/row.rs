//! Driver-independent result rows.
//!
//! Executors decode driver rows into [`Row`], an ordered list of
//! `(column name, sea_query::Value)` pairs. Entity mappings read from this type,
//! so they work the same against `may_postgres` and [`MockExecutor`](crate::mock::MockExecutor).

use crate::error::{GpError, GpResult};
use sea_query::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((name.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look a column up by name.
    ///
    /// Matching ignores ASCII case; the GP schema was defined against a
    /// case-insensitive collation and is not consistent about column casing.
    pub fn get(&self, name: &str) -> GpResult<&Value> {
        self.columns
            .iter()
            .find(|(column, _)| column.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
            .ok_or_else(|| GpError::ColumnNotFound(name.to_string()))
    }

    pub fn get_idx(&self, idx: usize) -> GpResult<&Value> {
        self.columns
            .get(idx)
            .map(|(_, value)| value)
            .ok_or_else(|| GpError::ColumnNotFound(format!("#{idx}")))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let row = Row::new()
            .with("NOTEINDX", Value::Int(Some(5)))
            .with("ITEMNMBR", "WIDGET");
        assert_eq!(row.get("noteindx").unwrap(), &Value::Int(Some(5)));
        assert_eq!(row.get("NOTeINDX").unwrap(), &Value::Int(Some(5)));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_missing_column() {
        let row = Row::new().with("A", 1i32);
        assert!(matches!(row.get("B"), Err(GpError::ColumnNotFound(c)) if c == "B"));
        assert!(matches!(row.get_idx(3), Err(GpError::ColumnNotFound(_))));
        assert_eq!(row.get_idx(0).unwrap(), &Value::Int(Some(1)));
    }
}
