//! # aviary-client
//!
//! Client-side data layer for the aviary bird catalog: a reqwest-based
//! gateway for the REST API, and the list state a rendering layer draws
//! from.
//!
//! A rendering layer talks only to [`Catalog`]; it never touches the HTTP
//! layer or the store directly.

pub mod catalog;
pub mod gateway;
pub mod state;

mod error;

pub use catalog::Catalog;
pub use error::GatewayError;
pub use gateway::BirdApi;
pub use state::{ListEvent, ListState};
