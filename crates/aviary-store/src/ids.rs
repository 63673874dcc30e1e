//! Identifier generation for new documents.

use uuid::Uuid;

/// Capability for assigning record identifiers at creation time.
///
/// The store depends on this trait instead of calling `Uuid::new_v4`
/// directly so tests can supply deterministic ids.
pub trait IdGenerator: Send {
    /// Produce a fresh identifier, unique for the lifetime of the store.
    fn generate(&self) -> String;
}

/// Default generator: random UUID v4.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
