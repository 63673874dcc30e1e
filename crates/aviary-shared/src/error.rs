use thiserror::Error;

/// A record failed the required-field constraints.
///
/// The payload names the offending field by its wire-level (camelCase)
/// spelling so the message can be shown to the caller as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string was blank, or a required sequence was empty.
    #[error("Field '{0}' is required and must not be empty")]
    MissingOrEmpty(&'static str),

    /// A sequence contained a blank entry.
    #[error("Field '{0}' must not contain empty entries")]
    EmptyEntry(&'static str),
}
