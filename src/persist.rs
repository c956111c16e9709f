//! Insert and lookup of mapped entities.
//!
//! Statements are rendered with SeaQuery's PostgreSQL builder and run through
//! whatever executor the caller passes in.

use crate::entity::Entity;
use crate::error::{GpError, GpResult};
use crate::executor::GpExecutor;
use crate::note_index::NoteIndexSource;
use rust_decimal::Decimal;
use sea_query::{Expr, ExprTrait, PostgresQueryBuilder, Query, Value};

/// A [`NoteIndexSource`] for inserts that must never allocate.
///
/// Entities without a note index column never consult it. For an entity with
/// an unset note index it fails the insert instead of consuming a counter value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoteIndex;

impl NoteIndexSource for NoNoteIndex {
    fn next_note_index(&self) -> GpResult<Decimal> {
        Err(GpError::QueryError(
            "note index required but no allocator was supplied".to_string(),
        ))
    }
}

/// Fill an unset note index from `notes`.
///
/// Returns the index now assigned, or `None` for tables without one. An index
/// that is already set is kept.
///
/// # Errors
///
/// Propagates allocation failures.
pub fn apply_note_index<T, N>(notes: &N, entity: &mut T) -> GpResult<Option<Decimal>>
where
    T: Entity,
    N: NoteIndexSource + ?Sized,
{
    match entity.note_index_mut() {
        None => Ok(None),
        Some(Some(existing)) => Ok(Some(*existing)),
        Some(slot) => {
            let note_index = notes.next_note_index()?;
            log::debug!(
                "assigned note index {note_index} to {}",
                T::table().entity
            );
            *slot = Some(note_index);
            Ok(Some(note_index))
        }
    }
}

/// Render the `INSERT` for `entity` without touching its note index.
///
/// # Errors
///
/// Returns `GpError` if a field cannot be bound.
pub fn insert_statement<T: Entity>(entity: &T) -> GpResult<(String, Vec<Value>)> {
    let table = T::table();
    let values = entity.values()?;

    let (sql, params) = Query::insert()
        .into_table(table.name)
        .columns(table.columns.iter().map(|c| c.name))
        .values(values.into_iter().map(Expr::val))?
        .build(PostgresQueryBuilder);
    Ok((sql, params.0))
}

/// Insert `entity`, allocating its note index first when it is unset.
///
/// The note index is written back to `entity` before the insert runs, so it
/// is visible to the caller even when the insert fails. `notes` should carry
/// the counter request on its own connection; an index it issued is never
/// returned when the insert is rolled back.
///
/// # Errors
///
/// Propagates allocation and executor errors unchanged.
pub fn insert<T, E, N>(executor: &E, notes: &N, entity: &mut T) -> GpResult<u64>
where
    T: Entity,
    E: GpExecutor + ?Sized,
    N: NoteIndexSource + ?Sized,
{
    apply_note_index(notes, entity)?;
    let (sql, params) = insert_statement(entity)?;
    let affected = executor.execute(&sql, &params)?;
    log::debug!("inserted {} into {}", T::table().entity, T::table().name);
    Ok(affected)
}

/// Render the primary key lookup for `T`.
///
/// # Errors
///
/// Returns `GpError::QueryError` when `key` does not match the number of
/// primary key columns.
pub fn select_by_key_statement<T: Entity>(key: &[Value]) -> GpResult<(String, Vec<Value>)> {
    let table = T::table();
    let key_columns: Vec<_> = table.primary_key().collect();
    if key_columns.len() != key.len() {
        return Err(GpError::QueryError(format!(
            "{} has {} key columns, got {} values",
            table.name,
            key_columns.len(),
            key.len()
        )));
    }

    let mut query = Query::select();
    query
        .columns(table.columns.iter().map(|c| c.name))
        .from(table.name);
    for (column, value) in key_columns.iter().zip(key) {
        query.and_where(Expr::col(column.name).eq(value.clone()));
    }

    let (sql, params) = query.build(PostgresQueryBuilder);
    Ok((sql, params.0))
}

/// Fetch the row of `T` with the given primary key.
///
/// Key values are given in primary key declaration order, already in their
/// stored form (see [`Entity::key_values`]).
///
/// # Errors
///
/// Propagates executor and row decoding errors.
pub fn find_by_key<T, E>(executor: &E, key: &[Value]) -> GpResult<Option<T>>
where
    T: Entity,
    E: GpExecutor + ?Sized,
{
    let (sql, params) = select_by_key_statement::<T>(key)?;
    executor
        .query_all(&sql, &params)?
        .first()
        .map(T::from_row)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockExecutor;
    use crate::note_index::{BoundAllocator, NoteIndexAllocator};
    use crate::row::Row;

    crate::gp_entity! {
        struct Lot : "IV00301" {
            item: String => "ITEMNMBR", StripString(31), key;
            lot: String => "LOTNUMBR", StripString(21), key;
            note_index: Option<Decimal> => "NOTEINDX", Numeric(19, 5), note_index;
        }
    }

    crate::gp_entity! {
        struct Account : "SY01100" {
            series: i32 => "SERIES", Integer, key;
            actidx: i32 => "ACTINDX", Integer;
        }
    }

    fn lot() -> Lot {
        Lot {
            item: "WIDGET".into(),
            lot: "L-1".into(),
            note_index: None,
        }
    }

    #[test]
    fn test_insert_statement_shape() {
        let (sql, params) = insert_statement(&lot()).unwrap();
        assert_eq!(
            sql,
            r#"INSERT INTO "IV00301" ("ITEMNMBR", "LOTNUMBR", "NOTEINDX") VALUES ($1, $2, $3)"#
        );
        assert_eq!(params[0], Value::from("WIDGET"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_insert_allocates_unset_note_index() {
        let counter = MockExecutor::new();
        counter.push_row(Row::new().with("n", Decimal::from(55)).with("s", 0i32));
        let allocator = NoteIndexAllocator::default();
        let notes = BoundAllocator::new(&allocator, &counter);

        let db = MockExecutor::new();
        let mut entity = lot();
        insert(&db, &notes, &mut entity).unwrap();

        assert_eq!(entity.note_index, Some(Decimal::from(55)));
        assert_eq!(counter.commits(), 1);
        let (_, params) = &db.executed()[0];
        assert_eq!(params[2], Value::from(Decimal::from(55)));
    }

    #[test]
    fn test_insert_keeps_existing_note_index() {
        let db = MockExecutor::new();
        let mut entity = Lot {
            note_index: Some(Decimal::from(7)),
            ..lot()
        };
        insert(&db, &NoNoteIndex, &mut entity).unwrap();
        assert_eq!(entity.note_index, Some(Decimal::from(7)));
    }

    #[test]
    fn test_missing_allocator_fails_before_insert() {
        let db = MockExecutor::new();
        let mut entity = lot();
        assert!(insert(&db, &NoNoteIndex, &mut entity).is_err());
        assert!(db.statements().is_empty());
    }

    #[test]
    fn test_entities_without_note_index_skip_allocation() {
        let db = MockExecutor::new();
        let mut account = Account {
            series: 4,
            actidx: 12,
        };
        insert(&db, &NoNoteIndex, &mut account).unwrap();
        assert_eq!(db.statements().len(), 1);
    }

    #[test]
    fn test_closure_source() {
        let db = MockExecutor::new();
        let mut entity = lot();
        let next = || -> GpResult<Decimal> { Ok(Decimal::from(3)) };
        assert_eq!(apply_note_index(&next, &mut entity).unwrap(), Some(Decimal::from(3)));
        insert(&db, &next, &mut entity).unwrap();
        assert_eq!(entity.note_index, Some(Decimal::from(3)));
    }

    #[test]
    fn test_find_by_key() {
        let db = MockExecutor::new();
        db.push_row(
            Row::new()
                .with("ITEMNMBR", "WIDGET   ")
                .with("LOTNUMBR", "L-1 ")
                .with("NOTEINDX", Decimal::from(12)),
        );

        let found: Option<Lot> =
            find_by_key(&db, &[Value::from("WIDGET"), Value::from("L-1")]).unwrap();
        let found = found.unwrap();
        assert_eq!(found.item, "WIDGET");
        assert_eq!(found.lot, "L-1");
        assert_eq!(found.note_index, Some(Decimal::from(12)));

        let sql = &db.statements()[0];
        assert!(sql.starts_with(r#"SELECT "ITEMNMBR", "LOTNUMBR", "NOTEINDX" FROM "IV00301" WHERE"#));
        assert!(sql.contains(r#""ITEMNMBR" = $1 AND "LOTNUMBR" = $2"#));

        let missing: Option<Lot> =
            find_by_key(&db, &[Value::from("X"), Value::from("Y")]).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_key_arity_checked() {
        let err = select_by_key_statement::<Lot>(&[Value::from("WIDGET")]).unwrap_err();
        assert!(matches!(err, GpError::QueryError(msg) if msg.contains("2 key columns")));
    }
}
