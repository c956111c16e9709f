//! # gp10
//!
//! Typed mappings onto the Microsoft Dynamics GP 10 company database.
//!
//! - [`ordinal`] converts GP's scaled sequence numbers (line 1 is stored as 16384).
//! - [`note_index`] draws note indexes from the company counter through the
//!   GP stored procedure.
//! - [`models`] maps the inventory, manufacturing, purchasing, sales and
//!   company tables, and [`persist`] inserts and looks them up.
//!
//! Statements run through a [`GpExecutor`]; [`MayPostgresExecutor`] is the
//! `may_postgres` implementation.

pub mod calendar;
pub mod config;
pub mod connection;
pub mod entity;
pub mod error;
pub mod executor;
pub mod metrics;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod models;
pub mod note_index;
pub mod ordinal;
pub mod persist;
pub mod row;
pub mod schema;
pub mod transaction;
pub mod types;
pub mod value_conversion;

pub use config::GpConfig;
pub use connection::connect;
pub use entity::Entity;
pub use error::{GpError, GpResult};
pub use executor::{GpExecutor, MayPostgresExecutor};
pub use note_index::{BoundAllocator, CounterProcedure, NoteIndexAllocator, NoteIndexSource};
pub use ordinal::{OrdinalCodec, OrdinalValue};
pub use persist::{find_by_key, insert};
pub use row::Row;
pub use transaction::{IsolationLevel, Transaction};

pub use rust_decimal::Decimal;
pub use sea_query::Value;
