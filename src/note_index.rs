//! Note index allocation.
//!
//! Every GP record that can carry an attached note owns a company-wide unique
//! note index. Indices are issued by a counter procedure in the system
//! database which atomically reads and increments the company's counter and
//! reports a status code.
//!
//! The allocator keeps no state of its own. Each call issues one request and
//! commits it immediately, so an issued index stays consumed even when the
//! insert it was meant for is rolled back.

use crate::config::NoteIndexConfig;
use crate::error::{GpError, GpResult};
use crate::executor::GpExecutor;
use crate::row::Row;
use crate::types::{decimal_from_value, i32_from_value, is_null};
use rust_decimal::Decimal;

#[cfg(feature = "tracing")]
use crate::metrics::tracing_helpers;
#[cfg(feature = "metrics")]
use crate::metrics::METRICS;

/// Where the counter procedure lives and how the company is identified.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterProcedure {
    pub system_schema: String,
    pub procedure: String,
    pub company_master: String,
}

impl Default for CounterProcedure {
    fn default() -> Self {
        Self::from(&NoteIndexConfig::default())
    }
}

impl From<&NoteIndexConfig> for CounterProcedure {
    fn from(config: &NoteIndexConfig) -> Self {
        Self {
            system_schema: config.system_schema.clone(),
            procedure: config.procedure.clone(),
            company_master: config.company_master.clone(),
        }
    }
}

impl CounterProcedure {
    /// The single statement that requests the next index.
    ///
    /// The company id is looked up in the company master by the name of the
    /// connected database and the backend process id identifies the session.
    /// The procedure yields one row: `(note index, status)`.
    pub fn statement(&self) -> String {
        format!(
            r#"SELECT * FROM {schema}.{procedure}((SELECT "CMPANYID" FROM {schema}.{master} WHERE "INTERID" = current_database()), pg_backend_pid())"#,
            schema = quote_ident(&self.system_schema),
            procedure = quote_ident(&self.procedure),
            master = quote_ident(&self.company_master),
        )
    }
}

fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Requests note indices from the counter procedure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteIndexAllocator {
    procedure: CounterProcedure,
}

impl NoteIndexAllocator {
    pub fn new(procedure: CounterProcedure) -> Self {
        Self { procedure }
    }

    pub fn from_config(config: &NoteIndexConfig) -> Self {
        Self::new(CounterProcedure::from(config))
    }

    pub fn procedure(&self) -> &CounterProcedure {
        &self.procedure
    }

    /// Obtain the next note index through `executor`.
    ///
    /// The request is committed before the status is inspected; a failed
    /// request leaves nothing pending on the connection.
    ///
    /// # Errors
    ///
    /// Returns `GpError::AllocationFailed` with the procedure's status when it is
    /// non-zero, and propagates executor errors unchanged. A nested
    /// [`Transaction`](crate::transaction::Transaction) cannot commit, so
    /// allocating through one fails with `GpError::NestedCommit`.
    pub fn allocate<E: GpExecutor + ?Sized>(&self, executor: &E) -> GpResult<Decimal> {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::allocate_note_index_span(&self.procedure.procedure).entered();

        let row = executor.query_one(&self.procedure.statement(), &[])?;
        executor.commit()?;

        let (note_index, status) = read_counter_row(&row)?;
        if status != 0 {
            log::warn!("{} returned status {status}", self.procedure.procedure);
            #[cfg(feature = "metrics")]
            METRICS.record_note_allocation_failure();
            return Err(GpError::AllocationFailed { status });
        }

        log::debug!("allocated note index {note_index}");
        #[cfg(feature = "metrics")]
        METRICS.record_note_allocated();
        Ok(note_index)
    }
}

/// The counter row is read by position; the procedure's output names vary.
fn read_counter_row(row: &Row) -> GpResult<(Decimal, i32)> {
    let status = i32_from_value(row.get_idx(1)?, "status")?;

    // A failed request may report a null index alongside its status.
    let note_index = match row.get_idx(0)? {
        value if status != 0 && is_null(value) => Decimal::ZERO,
        value => decimal_from_value(value, "note_index")?,
    };

    Ok((note_index, status))
}

/// Anything that can hand out note indices.
///
/// Inserting an entity with an unset note index asks its source for one.
pub trait NoteIndexSource {
    /// # Errors
    ///
    /// Returns `GpError` if no index could be obtained.
    fn next_note_index(&self) -> GpResult<Decimal>;
}

/// A [`NoteIndexAllocator`] bound to the executor that carries the counter
/// request.
///
/// Binding the allocator to its own executor keeps the counter commit apart
/// from the unit of work that inserts the entity.
pub struct BoundAllocator<'a, E: GpExecutor + ?Sized> {
    allocator: &'a NoteIndexAllocator,
    executor: &'a E,
}

impl<'a, E: GpExecutor + ?Sized> BoundAllocator<'a, E> {
    pub fn new(allocator: &'a NoteIndexAllocator, executor: &'a E) -> Self {
        Self {
            allocator,
            executor,
        }
    }
}

impl<E: GpExecutor + ?Sized> NoteIndexSource for BoundAllocator<'_, E> {
    fn next_note_index(&self) -> GpResult<Decimal> {
        self.allocator.allocate(self.executor)
    }
}

impl<F> NoteIndexSource for F
where
    F: Fn() -> GpResult<Decimal>,
{
    fn next_note_index(&self) -> GpResult<Decimal> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockExecutor;
    use sea_query::Value;

    fn counter_row(note_index: impl Into<Value>, status: i32) -> Row {
        Row::new().with("note_index", note_index).with("status", status)
    }

    #[test]
    fn test_statement_targets_system_schema() {
        let sql = CounterProcedure::default().statement();
        assert!(sql.starts_with(r#"SELECT * FROM "DYNAMICS"."smGetNextNoteIndex"("#));
        assert!(sql.contains(r#"FROM "DYNAMICS"."SY01500" WHERE "INTERID" = current_database()"#));
        assert!(sql.contains("pg_backend_pid()"));
    }

    #[test]
    fn test_identifiers_are_quoted() {
        let procedure = CounterProcedure {
            system_schema: "sys\"x".into(),
            ..CounterProcedure::default()
        };
        assert!(procedure.statement().contains(r#""sys""x""#));
    }

    #[test]
    fn test_successful_allocation() {
        let mock = MockExecutor::new();
        mock.push_row(counter_row(Decimal::from(42), 0));

        let allocator = NoteIndexAllocator::default();
        assert_eq!(allocator.allocate(&mock).unwrap(), Decimal::from(42));
        assert_eq!(mock.statements().len(), 1);
        assert_eq!(mock.commits(), 1);
    }

    #[test]
    fn test_integer_counter_values_are_accepted() {
        let mock = MockExecutor::new();
        mock.push_row(counter_row(7i64, 0));
        assert_eq!(
            NoteIndexAllocator::default().allocate(&mock).unwrap(),
            Decimal::from(7)
        );
    }

    #[test]
    fn test_non_zero_status_fails() {
        let mock = MockExecutor::new();
        mock.push_row(counter_row(Decimal::ZERO, 1));

        let err = NoteIndexAllocator::default().allocate(&mock).unwrap_err();
        assert!(matches!(err, GpError::AllocationFailed { status: 1 }));
        // committed before the status check
        assert_eq!(mock.commits(), 1);
    }

    #[test]
    fn test_null_index_with_failure_status() {
        let mock = MockExecutor::new();
        mock.push_row(counter_row(Value::from(None::<Decimal>), 3));
        let err = NoteIndexAllocator::default().allocate(&mock).unwrap_err();
        assert!(matches!(err, GpError::AllocationFailed { status: 3 }));
    }

    #[test]
    fn test_executor_errors_propagate() {
        let mock = MockExecutor::new();
        mock.push_query_error(GpError::QueryError("procedure missing".into()));
        let err = NoteIndexAllocator::default().allocate(&mock).unwrap_err();
        assert!(matches!(err, GpError::QueryError(_)));
        assert_eq!(mock.commits(), 0);

        assert!(matches!(
            NoteIndexAllocator::default().allocate(&mock),
            Err(GpError::NoRows)
        ));
    }

    #[test]
    fn test_bound_allocator_is_a_source() {
        let mock = MockExecutor::new();
        mock.push_row(counter_row(Decimal::from(100), 0));
        mock.push_row(counter_row(Decimal::from(101), 0));

        let allocator = NoteIndexAllocator::default();
        let source = BoundAllocator::new(&allocator, &mock);
        assert_eq!(source.next_note_index().unwrap(), Decimal::from(100));
        assert_eq!(source.next_note_index().unwrap(), Decimal::from(101));
    }

    #[test]
    fn test_from_config() {
        let config = NoteIndexConfig {
            procedure: "nextNote".into(),
            ..NoteIndexConfig::default()
        };
        let allocator = NoteIndexAllocator::from_config(&config);
        assert_eq!(allocator.procedure().procedure, "nextNote");
        assert!(allocator.procedure().statement().contains(r#""nextNote"("#));
    }
}
