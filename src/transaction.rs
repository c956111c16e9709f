//! Explicit units of work over any [`GpExecutor`].
//!
//! A [`Transaction`] issues `BEGIN` on creation and `COMMIT` or `ROLLBACK` when
//! it is finished. Nested transactions map to savepoints. A transaction that
//! is dropped while still open is rolled back.

use crate::error::{GpError, GpResult};
use crate::executor::GpExecutor;
use crate::row::Row;
use sea_query::Value;
use std::cell::Cell;

#[cfg(feature = "tracing")]
use crate::metrics::tracing_helpers;

/// Transaction isolation level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IsolationLevel {
    /// Read uncommitted (PostgreSQL treats it as ReadCommitted)
    ReadUncommitted,
    /// Read committed (default)
    #[default]
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

impl IsolationLevel {
    fn to_sql(self) -> &'static str {
        match self {
            IsolationLevel::ReadUncommitted => "READ UNCOMMITTED",
            IsolationLevel::ReadCommitted => "READ COMMITTED",
            IsolationLevel::RepeatableRead => "REPEATABLE READ",
            IsolationLevel::Serializable => "SERIALIZABLE",
        }
    }
}

/// A database transaction
///
/// The transaction holds a shared borrow of its executor. Other holders of the
/// same executor can still run statements, and those statements join the open
/// block. In particular a note index counter bound to this connection commits
/// the block when it allocates; bind the counter to a separate connection to
/// keep the transaction's own statements rollbackable.
///
/// # Examples
///
/// ```no_run
/// use gp10::{connect, GpError, GpExecutor, MayPostgresExecutor};
/// use sea_query::Value;
///
/// # fn main() -> Result<(), GpError> {
/// let executor = MayPostgresExecutor::new(connect("postgresql://sa:sa@localhost:5432/TWO")?);
///
/// let tx = executor.begin()?;
/// tx.execute(
///     r#"UPDATE "IV00102" SET "ATYALLOC" = "ATYALLOC" + $1 WHERE "ITEMNMBR" = $2"#,
///     &[Value::from(1i32), Value::from("WIDGET")],
/// )?;
/// tx.commit()?;
/// # Ok(())
/// # }
/// ```
pub struct Transaction<'e, E: GpExecutor + ?Sized> {
    executor: &'e E,
    depth: u32,
    closed: Cell<bool>,
}

impl<'e, E: GpExecutor + ?Sized> Transaction<'e, E> {
    /// Start a transaction with the default isolation level.
    ///
    /// # Errors
    ///
    /// Returns `GpError` if `BEGIN` fails.
    pub fn begin(executor: &'e E) -> GpResult<Self> {
        Self::begin_with_isolation(executor, IsolationLevel::default())
    }

    /// Start a transaction with a specific isolation level.
    ///
    /// # Errors
    ///
    /// Returns `GpError` if `BEGIN` fails.
    pub fn begin_with_isolation(executor: &'e E, isolation_level: IsolationLevel) -> GpResult<Self> {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::begin_transaction_span().entered();

        if isolation_level == IsolationLevel::ReadCommitted {
            executor.execute("BEGIN", &[])?;
        } else {
            let sql = format!("BEGIN ISOLATION LEVEL {}", isolation_level.to_sql());
            executor.execute(&sql, &[])?;
        }

        Ok(Self {
            executor,
            depth: 0,
            closed: Cell::new(false),
        })
    }

    /// Start a nested transaction backed by a savepoint.
    ///
    /// Rolling the nested transaction back leaves the outer one intact.
    ///
    /// # Errors
    ///
    /// Returns `GpError::TransactionClosed` if this transaction is finished.
    pub fn begin_nested(&self) -> GpResult<Transaction<'_, Self>> {
        self.ensure_open()?;
        let depth = self.depth + 1;
        self.executor.execute(&format!("SAVEPOINT sp_{depth}"), &[])?;
        Ok(Transaction {
            executor: self,
            depth,
            closed: Cell::new(false),
        })
    }

    /// Commit the transaction, or release the savepoint of a nested one.
    ///
    /// # Errors
    ///
    /// Returns `GpError::TransactionClosed` if the transaction is already finished.
    pub fn commit(self) -> GpResult<()> {
        self.finish_commit()
    }

    /// Roll the transaction back, or back to the savepoint of a nested one.
    ///
    /// # Errors
    ///
    /// Returns `GpError::TransactionClosed` if the transaction is already finished.
    pub fn rollback(self) -> GpResult<()> {
        self.finish_rollback()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    fn ensure_open(&self) -> GpResult<()> {
        if self.closed.get() {
            Err(GpError::TransactionClosed)
        } else {
            Ok(())
        }
    }

    fn finish_commit(&self) -> GpResult<()> {
        self.ensure_open()?;

        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::commit_transaction_span().entered();

        if self.depth == 0 {
            self.executor.execute("COMMIT", &[])?;
        } else {
            self.executor
                .execute(&format!("RELEASE SAVEPOINT sp_{}", self.depth), &[])?;
        }
        self.closed.set(true);
        Ok(())
    }

    fn finish_rollback(&self) -> GpResult<()> {
        self.ensure_open()?;

        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::rollback_transaction_span().entered();

        // Closed even if the statement fails; the server aborts the block anyway.
        self.closed.set(true);
        if self.depth == 0 {
            self.executor.execute("ROLLBACK", &[])?;
        } else {
            self.executor
                .execute(&format!("ROLLBACK TO SAVEPOINT sp_{}", self.depth), &[])?;
        }
        Ok(())
    }
}

impl<E: GpExecutor + ?Sized> GpExecutor for Transaction<'_, E> {
    fn execute(&self, query: &str, params: &[Value]) -> GpResult<u64> {
        self.ensure_open()?;
        self.executor.execute(query, params)
    }

    fn query_one(&self, query: &str, params: &[Value]) -> GpResult<Row> {
        self.ensure_open()?;
        self.executor.query_one(query, params)
    }

    fn query_all(&self, query: &str, params: &[Value]) -> GpResult<Vec<Row>> {
        self.ensure_open()?;
        self.executor.query_all(query, params)
    }

    /// Commits the outermost transaction. Later calls return `TransactionClosed`.
    ///
    /// A nested transaction cannot make anything durable on its own, so it
    /// answers with `GpError::NestedCommit` and stays open.
    fn commit(&self) -> GpResult<()> {
        self.ensure_open()?;
        if self.depth > 0 {
            return Err(GpError::NestedCommit { depth: self.depth });
        }
        self.finish_commit()
    }
}

impl<E: GpExecutor + ?Sized> Drop for Transaction<'_, E> {
    fn drop(&mut self) {
        if !self.closed.get() {
            log::warn!(
                "transaction at depth {} dropped while open, rolling back",
                self.depth
            );
            if let Err(e) = self.finish_rollback() {
                log::warn!("rollback on drop failed: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockExecutor;

    #[test]
    fn test_isolation_level_to_sql() {
        assert_eq!(IsolationLevel::ReadUncommitted.to_sql(), "READ UNCOMMITTED");
        assert_eq!(IsolationLevel::ReadCommitted.to_sql(), "READ COMMITTED");
        assert_eq!(IsolationLevel::RepeatableRead.to_sql(), "REPEATABLE READ");
        assert_eq!(IsolationLevel::Serializable.to_sql(), "SERIALIZABLE");
        assert_eq!(IsolationLevel::default(), IsolationLevel::ReadCommitted);
    }

    #[test]
    fn test_commit_sequence() {
        let mock = MockExecutor::new();
        let tx = Transaction::begin(&mock).unwrap();
        tx.execute("DELETE FROM \"IV00301\"", &[]).unwrap();
        tx.commit().unwrap();
        assert_eq!(
            mock.statements(),
            vec!["BEGIN", "DELETE FROM \"IV00301\"", "COMMIT"]
        );
    }

    #[test]
    fn test_isolation_level_in_begin() {
        let mock = MockExecutor::new();
        let tx = Transaction::begin_with_isolation(&mock, IsolationLevel::Serializable).unwrap();
        tx.rollback().unwrap();
        assert_eq!(
            mock.statements(),
            vec!["BEGIN ISOLATION LEVEL SERIALIZABLE", "ROLLBACK"]
        );
    }

    #[test]
    fn test_drop_rolls_back() {
        let mock = MockExecutor::new();
        {
            let tx = Transaction::begin(&mock).unwrap();
            tx.execute("SELECT 1", &[]).unwrap();
        }
        assert_eq!(mock.statements(), vec!["BEGIN", "SELECT 1", "ROLLBACK"]);
    }

    #[test]
    fn test_closed_transaction_rejects_statements() {
        let mock = MockExecutor::new();
        let tx = Transaction::begin(&mock).unwrap();
        GpExecutor::commit(&tx).unwrap();
        assert!(tx.is_closed());
        assert!(matches!(
            tx.execute("SELECT 1", &[]),
            Err(GpError::TransactionClosed)
        ));
        assert!(matches!(tx.commit(), Err(GpError::TransactionClosed)));
        assert_eq!(mock.statements(), vec!["BEGIN", "COMMIT"]);
    }

    #[test]
    fn test_nested_refuses_executor_commit() {
        let mock = MockExecutor::new();
        let outer = Transaction::begin(&mock).unwrap();
        {
            let inner = outer.begin_nested().unwrap();
            assert!(matches!(
                GpExecutor::commit(&inner),
                Err(GpError::NestedCommit { depth: 1 })
            ));
            assert!(!inner.is_closed());
        }
        outer.rollback().unwrap();
        assert_eq!(
            mock.statements(),
            vec![
                "BEGIN",
                "SAVEPOINT sp_1",
                "ROLLBACK TO SAVEPOINT sp_1",
                "ROLLBACK"
            ]
        );
    }

    #[test]
    fn test_shared_executor_joins_open_block() {
        let mock = MockExecutor::new();
        let tx = Transaction::begin(&mock).unwrap();
        mock.execute("UPDATE \"SY01500\"", &[]).unwrap();
        tx.commit().unwrap();
        assert_eq!(
            mock.statements(),
            vec!["BEGIN", "UPDATE \"SY01500\"", "COMMIT"]
        );
    }

    #[test]
    fn test_nested_uses_savepoints() {
        let mock = MockExecutor::new();
        let outer = Transaction::begin(&mock).unwrap();
        {
            let inner = outer.begin_nested().unwrap();
            assert_eq!(inner.depth(), 1);
            inner.execute("INSERT", &[]).unwrap();
            inner.rollback().unwrap();
        }
        outer.commit().unwrap();
        assert_eq!(
            mock.statements(),
            vec![
                "BEGIN",
                "SAVEPOINT sp_1",
                "INSERT",
                "ROLLBACK TO SAVEPOINT sp_1",
                "COMMIT"
            ]
        );
    }
}
