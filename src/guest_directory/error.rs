//! Error types for the Guest Directory.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during guest operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GuestError {
    /// The requested guest was not found.
    #[error("Guest not found: {0}")]
    NotFound(String),

    /// A guest with the same id already exists.
    #[error("Guest already exists: {0}")]
    DuplicateId(String),

    /// The guest data provided is invalid.
    #[error("Guest validation error: {0}")]
    Validation(String),
}

impl From<FrameworkError> for GuestError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => GuestError::NotFound(id),
            FrameworkError::DuplicateId(id) => GuestError::DuplicateId(id),
            FrameworkError::IdSpaceExhausted(last) => {
                GuestError::Validation(format!("no guest id left after {last}"))
            }
        }
    }
}
