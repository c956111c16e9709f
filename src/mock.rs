//! In-memory executor for tests.
//!
//! `MockExecutor` records every statement with its parameters and answers
//! queries from queues filled by the test. Statements that have no queued
//! answer succeed with zero affected rows or an empty result set.

use crate::error::{GpError, GpResult};
use crate::executor::GpExecutor;
use crate::row::Row;
use sea_query::Value;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct MockExecutor {
    executed: RefCell<Vec<(String, Vec<Value>)>>,
    query_results: RefCell<VecDeque<GpResult<Vec<Row>>>>,
    execute_results: RefCell<VecDeque<GpResult<u64>>>,
    commits: Cell<usize>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result set for the next `query_one`/`query_all`.
    pub fn push_rows(&self, rows: Vec<Row>) {
        self.query_results.borrow_mut().push_back(Ok(rows));
    }

    /// Queue a single-row result.
    pub fn push_row(&self, row: Row) {
        self.push_rows(vec![row]);
    }

    /// Make the next query fail.
    pub fn push_query_error(&self, error: GpError) {
        self.query_results.borrow_mut().push_back(Err(error));
    }

    /// Queue the affected-row count (or failure) for the next `execute`.
    pub fn push_execute_result(&self, result: GpResult<u64>) {
        self.execute_results.borrow_mut().push_back(result);
    }

    /// SQL of every statement seen so far, in order.
    pub fn statements(&self) -> Vec<String> {
        self.executed
            .borrow()
            .iter()
            .map(|(sql, _)| sql.clone())
            .collect()
    }

    /// Statements together with their bound parameters.
    pub fn executed(&self) -> Vec<(String, Vec<Value>)> {
        self.executed.borrow().clone()
    }

    /// Number of `GpExecutor::commit` calls.
    pub fn commits(&self) -> usize {
        self.commits.get()
    }

    fn record(&self, query: &str, params: &[Value]) {
        self.executed
            .borrow_mut()
            .push((query.to_string(), params.to_vec()));
    }
}

impl GpExecutor for MockExecutor {
    fn execute(&self, query: &str, params: &[Value]) -> GpResult<u64> {
        self.record(query, params);
        self.execute_results.borrow_mut().pop_front().unwrap_or(Ok(0))
    }

    fn query_one(&self, query: &str, params: &[Value]) -> GpResult<Row> {
        self.query_all(query, params)?
            .into_iter()
            .next()
            .ok_or(GpError::NoRows)
    }

    fn query_all(&self, query: &str, params: &[Value]) -> GpResult<Vec<Row>> {
        self.record(query, params);
        self.query_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn commit(&self) -> GpResult<()> {
        self.commits.set(self.commits.get() + 1);
        Ok(())
    }
}
