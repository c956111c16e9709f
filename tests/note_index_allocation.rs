//! Note index allocation against a simulated company counter.
//!
//! `Company` plays the server: one counter shared by every connection, bumped
//! by the counter procedure and made durable only when the calling
//! connection commits.

use gp10::models::inventory::SiteSetup;
use gp10::persist::{insert, NoNoteIndex};
use gp10::{
    BoundAllocator, CounterProcedure, Decimal, GpError, GpExecutor, GpResult,
    NoteIndexAllocator, NoteIndexSource, Row, Transaction, Value,
};
use std::cell::{Cell, RefCell};

#[derive(Default)]
struct Company {
    counter: Cell<i64>,
    fail_status: Cell<i32>,
}

/// One connection to `Company`, in autocommit mode until `BEGIN`.
struct Connection<'c> {
    company: &'c Company,
    in_transaction: Cell<bool>,
    pending: Cell<i64>,
    statements: RefCell<Vec<String>>,
}

impl<'c> Connection<'c> {
    fn new(company: &'c Company) -> Self {
        Self {
            company,
            in_transaction: Cell::new(false),
            pending: Cell::new(0),
            statements: RefCell::new(Vec::new()),
        }
    }

    fn apply_pending(&self) {
        let c = &self.company.counter;
        c.set(c.get() + self.pending.replace(0));
    }

    fn statements(&self) -> Vec<String> {
        self.statements.borrow().clone()
    }
}

impl GpExecutor for Connection<'_> {
    fn execute(&self, query: &str, _params: &[Value]) -> GpResult<u64> {
        self.statements.borrow_mut().push(query.to_string());
        if query.starts_with("BEGIN") {
            self.in_transaction.set(true);
        } else if query == "COMMIT" {
            self.apply_pending();
            self.in_transaction.set(false);
        } else if query == "ROLLBACK" {
            self.pending.set(0);
            self.in_transaction.set(false);
        }
        Ok(1)
    }

    fn query_one(&self, query: &str, _params: &[Value]) -> GpResult<Row> {
        self.statements.borrow_mut().push(query.to_string());
        let status = self.company.fail_status.get();
        if status != 0 {
            return Ok(Row::new()
                .with("O_mNoteIndex", None::<Decimal>)
                .with("O_iErrorState", status));
        }

        self.pending.set(self.pending.get() + 1);
        let next = self.company.counter.get() + self.pending.get();
        if !self.in_transaction.get() {
            self.apply_pending();
        }
        Ok(Row::new()
            .with("O_mNoteIndex", Decimal::from(next))
            .with("O_iErrorState", 0i32))
    }

    fn query_all(&self, query: &str, params: &[Value]) -> GpResult<Vec<Row>> {
        Ok(vec![self.query_one(query, params)?])
    }

    fn commit(&self) -> GpResult<()> {
        if self.in_transaction.get() {
            self.execute("COMMIT", &[])?;
        }
        Ok(())
    }
}

#[test]
fn test_sequential_allocations_increase() {
    let company = Company::default();
    let conn = Connection::new(&company);
    let allocator = NoteIndexAllocator::default();

    let first = allocator.allocate(&conn).unwrap();
    let second = allocator.allocate(&conn).unwrap();
    assert_eq!(first, Decimal::from(1));
    assert_eq!(second, Decimal::from(2));
    assert_eq!(company.counter.get(), 2);
    assert_eq!(conn.statements()[0], CounterProcedure::default().statement());
}

#[test]
fn test_index_is_not_reused_after_rolled_back_insert() {
    let company = Company::default();
    let work = Connection::new(&company);
    let counter_conn = Connection::new(&company);
    let allocator = NoteIndexAllocator::default();
    let notes = BoundAllocator::new(&allocator, &counter_conn);

    let tx = Transaction::begin(&work).unwrap();
    let mut site = SiteSetup::new("PCSF", "Main warehouse");
    insert(&tx, &notes, &mut site).unwrap();
    tx.rollback().unwrap();
    assert_eq!(site.note_index, Some(Decimal::from(1)));

    let mut retry = SiteSetup::new("PCSF", "Main warehouse");
    insert(&work, &notes, &mut retry).unwrap();
    assert_eq!(retry.note_index, Some(Decimal::from(2)));
    assert_eq!(company.counter.get(), 2);

    let inserts: Vec<_> = work
        .statements()
        .into_iter()
        .filter(|s| s.starts_with("INSERT"))
        .collect();
    assert_eq!(inserts.len(), 2);
}

#[test]
fn test_allocation_commits_the_calling_transaction() {
    let company = Company::default();
    let conn = Connection::new(&company);
    let allocator = NoteIndexAllocator::default();

    let tx = Transaction::begin(&conn).unwrap();
    let note_index = allocator.allocate(&tx).unwrap();
    assert_eq!(note_index, Decimal::from(1));
    assert!(tx.is_closed());
    assert_eq!(company.counter.get(), 1);

    // The unit of work already ended with the allocation.
    assert!(matches!(tx.rollback(), Err(GpError::TransactionClosed)));
    assert_eq!(allocator.allocate(&conn).unwrap(), Decimal::from(2));
}

#[test]
fn test_nested_transaction_cannot_consume_an_index() {
    let company = Company::default();
    let conn = Connection::new(&company);
    let allocator = NoteIndexAllocator::default();

    let tx = Transaction::begin(&conn).unwrap();
    {
        let inner = tx.begin_nested().unwrap();
        let err = allocator.allocate(&inner).unwrap_err();
        assert!(matches!(err, GpError::NestedCommit { depth: 1 }));
    }
    tx.rollback().unwrap();
    assert_eq!(company.counter.get(), 0);

    let issued = [
        allocator.allocate(&conn).unwrap(),
        allocator.allocate(&conn).unwrap(),
    ];
    assert_eq!(issued, [Decimal::from(1), Decimal::from(2)]);
}

#[test]
fn test_counter_on_working_connection_commits_open_block() {
    let company = Company::default();
    let conn = Connection::new(&company);
    let allocator = NoteIndexAllocator::default();
    let notes = BoundAllocator::new(&allocator, &conn);

    let tx = Transaction::begin(&conn).unwrap();
    let mut site = SiteSetup::new("PCSF", "Main warehouse");
    insert(&tx, &notes, &mut site).unwrap();
    tx.rollback().unwrap();
    assert_eq!(company.counter.get(), 1);

    let mut retry = SiteSetup::new("PCSF", "Main warehouse");
    insert(&conn, &notes, &mut retry).unwrap();
    assert_ne!(retry.note_index, site.note_index);
    assert_eq!(retry.note_index, Some(Decimal::from(2)));

    let statements = conn.statements();
    assert_eq!(
        statements[..3],
        [
            "BEGIN".to_string(),
            CounterProcedure::default().statement(),
            "COMMIT".to_string(),
        ]
    );
}

#[test]
fn test_non_zero_status_fails() {
    let company = Company::default();
    company.fail_status.set(3);
    let conn = Connection::new(&company);

    let err = NoteIndexAllocator::default().allocate(&conn).unwrap_err();
    assert!(matches!(err, GpError::AllocationFailed { status: 3 }));
    assert_eq!(company.counter.get(), 0);
}

#[test]
fn test_failed_allocation_blocks_insert() {
    let company = Company::default();
    company.fail_status.set(1);
    let work = Connection::new(&company);
    let counter_conn = Connection::new(&company);
    let allocator = NoteIndexAllocator::default();
    let notes = BoundAllocator::new(&allocator, &counter_conn);

    let mut site = SiteSetup::new("PCSF", "Main warehouse");
    let err = insert(&work, &notes, &mut site).unwrap_err();
    assert!(matches!(err, GpError::AllocationFailed { status: 1 }));
    assert!(site.note_index.is_none());
    assert!(work.statements().is_empty());
}

#[test]
fn test_explicit_note_index_skips_counter() {
    let company = Company::default();
    let work = Connection::new(&company);

    let mut site = SiteSetup {
        note_index: Some(Decimal::from(900)),
        ..SiteSetup::new("PCSF", "Main warehouse")
    };
    insert(&work, &NoNoteIndex, &mut site).unwrap();
    assert_eq!(company.counter.get(), 0);
    assert_eq!(site.note_index, Some(Decimal::from(900)));
}

#[test]
fn test_custom_procedure_location() {
    let procedure = CounterProcedure {
        system_schema: "gp_system".into(),
        ..CounterProcedure::default()
    };
    let company = Company::default();
    let conn = Connection::new(&company);
    let allocator = NoteIndexAllocator::new(procedure);
    let source: &dyn NoteIndexSource = &BoundAllocator::new(&allocator, &conn);

    assert_eq!(source.next_note_index().unwrap(), Decimal::from(1));
    assert!(conn.statements()[0].contains(r#""gp_system"."smGetNextNoteIndex""#));
}
