//! Table metadata for mapped entities.
//!
//! Definitions are `static` and generated by [`gp_entity!`](crate::gp_entity).
//! They describe the existing GP schema; nothing here creates or alters tables.

use crate::types::ColumnType;

/// How a column is filled when the entity leaves it unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnDefault {
    /// The constructor supplies the value.
    #[default]
    None,
    /// Allocated from the note index counter at insert time.
    NextNoteIndex,
}

/// Column definition metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name in the database
    pub name: &'static str,
    /// Rust field the column maps to
    pub field: &'static str,
    pub column_type: ColumnType,
    pub primary_key: bool,
    pub default: ColumnDefault,
}

/// Composite foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeyDef {
    pub columns: &'static [&'static str],
    pub references: &'static str,
    pub referenced_columns: &'static [&'static str],
}

/// Table definition metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    /// Name of the Rust type mapped onto the table
    pub entity: &'static str,
    /// Columns in declaration order; bound values follow the same order.
    pub columns: &'static [ColumnDef],
    pub foreign_keys: &'static [ForeignKeyDef],
}

impl TableDef {
    /// Look a column up by database name, ignoring ASCII case.
    pub fn column(&self, name: &str) -> Option<&'static ColumnDef> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Primary key columns in declaration order.
    pub fn primary_key(&self) -> impl Iterator<Item = &'static ColumnDef> {
        self.columns.iter().filter(|c| c.primary_key)
    }

    pub fn note_index_column(&self) -> Option<&'static ColumnDef> {
        self.columns
            .iter()
            .find(|c| c.default == ColumnDefault::NextNoteIndex)
    }

    /// Foreign keys that point at `table`.
    pub fn references_to<'a>(&self, table: &'a str) -> impl Iterator<Item = &'static ForeignKeyDef> + 'a {
        self.foreign_keys
            .iter()
            .filter(move |fk| fk.references.eq_ignore_ascii_case(table))
    }
}
