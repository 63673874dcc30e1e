//! # aviary-store
//!
//! Document store for bird records, backed by SQLite.
//!
//! Each record is persisted as one JSON document keyed by its `id`.  The
//! crate exposes a synchronous [`Database`] handle that wraps a
//! `rusqlite::Connection` and provides a typed CRUD helper for each of the
//! five store operations.

pub mod birds;
pub mod database;
pub mod ids;
pub mod migrations;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use ids::{IdGenerator, UuidIds};
