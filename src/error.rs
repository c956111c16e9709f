//! Crate error type.
//!
//! Every fallible operation in `gp10` returns [`GpError`]. Errors are never
//! retried or swallowed inside the crate; they propagate to the immediate caller.

use may_postgres::Error as PostgresError;
use std::fmt;

/// Result alias used throughout the crate.
pub type GpResult<T> = Result<T, GpError>;

/// Error type for codec, allocation and data-access failures
#[derive(Debug)]
pub enum GpError {
    /// Input to the ordinal codec could not be read as an exact decimal,
    /// or the encoded value does not fit the storage integer
    InvalidOrdinalValue(String),
    /// The note index counter procedure reported a non-zero status
    AllocationFailed {
        /// Status code returned by the counter procedure
        status: i32,
    },
    /// `PostgreSQL` error from `may_postgres`
    PostgresError(PostgresError),
    /// Statement could not be built or executed
    QueryError(String),
    /// A mapped column is missing from a result row
    ColumnNotFound(String),
    /// A column held a value of an unexpected type
    TypeMismatch {
        column: String,
        expected: String,
        actual: String,
    },
    /// A NOT NULL column came back null
    NullValue(String),
    /// A single-row fetch returned no rows
    NoRows,
    /// Transaction already committed or rolled back
    TransactionClosed,
    /// A durable commit was requested from inside a savepoint
    NestedCommit {
        /// Savepoint depth of the transaction asked to commit
        depth: u32,
    },
    /// Invalid connection string format
    InvalidConnectionString(String),
    /// Configuration could not be loaded
    Config(config::ConfigError),
}

impl fmt::Display for GpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpError::InvalidOrdinalValue(s) => write!(f, "Invalid ordinal value: {s}"),
            GpError::AllocationFailed { status } => {
                write!(f, "Note index allocation failed with status {status}")
            }
            GpError::PostgresError(e) => write!(f, "PostgreSQL error: {e}"),
            GpError::QueryError(s) => write!(f, "Query error: {s}"),
            GpError::ColumnNotFound(column) => write!(f, "Column not found: {column}"),
            GpError::TypeMismatch {
                column,
                expected,
                actual,
            } => write!(
                f,
                "Type mismatch for column {column}: expected {expected}, got {actual}"
            ),
            GpError::NullValue(column) => write!(f, "Column {column} is null"),
            GpError::NoRows => write!(f, "Query returned no rows"),
            GpError::TransactionClosed => {
                write!(f, "Transaction has already been committed or rolled back")
            }
            GpError::NestedCommit { depth } => write!(
                f,
                "Cannot commit durably from a nested transaction at depth {depth}"
            ),
            GpError::InvalidConnectionString(s) => write!(f, "Invalid connection string: {s}"),
            GpError::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for GpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpError::PostgresError(e) => Some(e),
            GpError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PostgresError> for GpError {
    fn from(err: PostgresError) -> Self {
        GpError::PostgresError(err)
    }
}

impl From<config::ConfigError> for GpError {
    fn from(err: config::ConfigError) -> Self {
        GpError::Config(err)
    }
}

impl From<sea_query::error::Error> for GpError {
    fn from(err: sea_query::error::Error) -> Self {
        GpError::QueryError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_failed_carries_status() {
        let err = GpError::AllocationFailed { status: 7 };
        assert!(err.to_string().contains("status 7"));
        assert!(matches!(err, GpError::AllocationFailed { status: 7 }));
    }

    #[test]
    fn test_display_variants() {
        assert!(GpError::InvalidOrdinalValue("abc".into())
            .to_string()
            .contains("Invalid ordinal value: abc"));
        assert!(GpError::ColumnNotFound("ITEMNMBR".into())
            .to_string()
            .contains("ITEMNMBR"));
        assert!(GpError::TypeMismatch {
            column: "QTYONHND".into(),
            expected: "Decimal".into(),
            actual: "String".into(),
        }
        .to_string()
        .contains("expected Decimal, got String"));
        assert!(GpError::TransactionClosed
            .to_string()
            .contains("already been committed"));
        assert!(GpError::NestedCommit { depth: 2 }
            .to_string()
            .contains("depth 2"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: GpError = config::ConfigError::Message("bad".into()).into();
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
