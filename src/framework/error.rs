//! # Framework Errors
//!
//! Errors raised by the generic store itself, independent of any entity's business rules.
//! Each entity error type converts from these via `From`.

/// Errors that can occur within the resource store.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("No id left after {0}")]
    IdSpaceExhausted(String),
}
