//! Error types for the Catalog Store.

use crate::framework::FrameworkError;
use crate::model::HomestayId;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested unit was not found.
    #[error("Homestay not found: {0}")]
    NotFound(String),

    /// A unit with the same id already exists.
    #[error("Homestay already exists: {0}")]
    DuplicateId(String),

    /// A field was missing or could not be parsed.
    #[error("Homestay validation error: {0}")]
    Validation(String),

    /// The unit already has a guest.
    #[error("Homestay {0} is already occupied")]
    AlreadyOccupied(HomestayId),

    /// The unit has no guest to check out.
    #[error("Homestay {0} is not occupied")]
    NotOccupied(HomestayId),
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            FrameworkError::DuplicateId(id) => CatalogError::DuplicateId(id),
            FrameworkError::IdSpaceExhausted(last) => {
                CatalogError::Validation(format!("no homestay id left after {last}"))
            }
        }
    }
}
