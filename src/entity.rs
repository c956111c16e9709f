//! Mapped entities.
//!
//! An [`Entity`] is a plain struct bound to one GP table. The struct, its
//! static [`TableDef`] and the row conversions are generated together by
//! [`gp_entity!`](crate::gp_entity) from a single field list, so the three can
//! never disagree about column order.

use crate::error::GpResult;
use crate::row::Row;
use crate::schema::TableDef;
use rust_decimal::Decimal;
use sea_query::Value;

pub trait Entity: Sized {
    fn table() -> &'static TableDef;

    /// Bound values for every column, in [`TableDef::columns`] order.
    ///
    /// # Errors
    ///
    /// Returns `GpError` when a field cannot be represented in its column.
    fn values(&self) -> GpResult<Vec<Value>>;

    /// # Errors
    ///
    /// Returns `GpError` when a mapped column is missing, null or of the wrong type.
    fn from_row(row: &Row) -> GpResult<Self>;

    /// Values of the primary key columns, in declaration order.
    ///
    /// # Errors
    ///
    /// Same as [`values`](Self::values).
    fn key_values(&self) -> GpResult<Vec<Value>> {
        let values = self.values()?;
        Ok(Self::table()
            .columns
            .iter()
            .zip(values)
            .filter(|(column, _)| column.primary_key)
            .map(|(_, value)| value)
            .collect())
    }

    /// The field backing the note index column, if the table has one.
    fn note_index_mut(&mut self) -> Option<&mut Option<Decimal>> {
        None
    }
}

/// Declare a mapped entity.
///
/// ```rust
/// use gp10::{gp_entity, Decimal, Entity};
///
/// gp_entity! {
///     /// Item lot attributes
///     pub struct LotTag : "IV00301" {
///         item: String => "ITEMNMBR", StripString(31), key;
///         lot: String => "LOTNUMBR", StripString(21), key;
///         note_index: Option<Decimal> => "NOTEINDX", Numeric(19, 5), note_index;
///     }
///     foreign_keys {
///         ["ITEMNMBR"] => "IV00101" ["ITEMNMBR"];
///     }
/// }
///
/// let table = LotTag::table();
/// assert_eq!(table.name, "IV00301");
/// assert_eq!(table.primary_key().count(), 2);
/// ```
///
/// Each field reads `name: Type => "COLUMN", Kind(args), flags;` where `Kind`
/// is a [`ColumnType`](crate::types::ColumnType) variant and the optional flags
/// are `key` (part of the primary key) and `note_index` (allocated on insert
/// when unset; the field must be an `Option<Decimal>`).
#[macro_export]
macro_rules! gp_entity {
    (@is_key) => { false };
    (@is_key key $($rest:ident)*) => { true };
    (@is_key $other:ident $($rest:ident)*) => { $crate::gp_entity!(@is_key $($rest)*) };

    (@default) => { $crate::schema::ColumnDefault::None };
    (@default note_index $($rest:ident)*) => { $crate::schema::ColumnDefault::NextNoteIndex };
    (@default $other:ident $($rest:ident)*) => { $crate::gp_entity!(@default $($rest)*) };

    (@note_slot $self:ident $field:ident) => { None };
    (@note_slot $self:ident $field:ident note_index $($rest:ident)*) => { Some(&mut $self.$field) };
    (@note_slot $self:ident $field:ident $other:ident $($rest:ident)*) => {
        $crate::gp_entity!(@note_slot $self $field $($rest)*)
    };

    (@ty $kind:ident $(($($arg:expr),*))?) => {
        $crate::types::ColumnType::$kind $(($($arg),*))?
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $table:literal {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty => $column:literal, $kind:ident $(($($arg:expr),*))? $(, $flag:ident)* ;
            )+
        }
        $(
            foreign_keys {
                $( [$($fk_column:literal),+] => $references:literal [$($ref_column:literal),+] ; )*
            }
        )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )+
        }

        impl $name {
            pub const TABLE_NAME: &'static str = $table;
        }

        impl $crate::entity::Entity for $name {
            fn table() -> &'static $crate::schema::TableDef {
                static TABLE: $crate::schema::TableDef = $crate::schema::TableDef {
                    name: $table,
                    entity: stringify!($name),
                    columns: &[
                        $(
                            $crate::schema::ColumnDef {
                                name: $column,
                                field: stringify!($field),
                                column_type: $crate::gp_entity!(@ty $kind $(($($arg),*))?),
                                primary_key: $crate::gp_entity!(@is_key $($flag)*),
                                default: $crate::gp_entity!(@default $($flag)*),
                            },
                        )+
                    ],
                    foreign_keys: &[
                        $($(
                            $crate::schema::ForeignKeyDef {
                                columns: &[$($fk_column),+],
                                references: $references,
                                referenced_columns: &[$($ref_column),+],
                            },
                        )*)?
                    ],
                };
                &TABLE
            }

            fn values(&self) -> $crate::GpResult<::std::vec::Vec<$crate::Value>> {
                Ok(vec![
                    $(
                        $crate::types::ColumnValue::to_value(
                            &self.$field,
                            $crate::gp_entity!(@ty $kind $(($($arg),*))?),
                        )?,
                    )+
                ])
            }

            fn from_row(row: &$crate::row::Row) -> $crate::GpResult<Self> {
                Ok(Self {
                    $(
                        $field: <$ty as $crate::types::ColumnValue>::from_value(
                            row.get($column)?,
                            $crate::gp_entity!(@ty $kind $(($($arg),*))?),
                            $column,
                        )?,
                    )+
                })
            }

            fn note_index_mut(&mut self) -> Option<&mut Option<$crate::Decimal>> {
                None $( .or($crate::gp_entity!(@note_slot self $field $($flag)*)) )+
            }
        }
    };
}
