//! # aviary-shared
//!
//! Data model and validation shared by the aviary server, store, and client.
//!
//! The structs here are the wire format: they cross the HTTP boundary as
//! camelCase JSON and are persisted verbatim as store documents.

pub mod bird;
pub mod error;

pub use bird::{Appearance, Bird, BirdFields};
pub use error::ValidationError;
