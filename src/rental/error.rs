//! Error types for the rental state machine.
//!
//! None of these are fatal: each one rejects a single command and leaves every unit and
//! the rental cursor exactly as they were.

use crate::catalog::CatalogError;
use crate::model::HomestayId;
use thiserror::Error;

/// Errors that can occur during rental operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RentalError {
    /// The unit does not exist.
    #[error("Homestay not found: {0}")]
    UnitNotFound(HomestayId),

    /// Rentals can only start on a vacant unit; occupied units only offer checkout.
    #[error("Homestay {0} is occupied")]
    UnitOccupied(HomestayId),

    /// Checkout was requested for a vacant unit.
    #[error("Homestay {0} is not occupied")]
    NotOccupied(HomestayId),

    /// No guest selection is in progress.
    #[error("No rental is in progress")]
    NoActiveSelection,

    /// The rental cursor is not on this unit.
    #[error("No rental is in progress for homestay {0}")]
    NotSelecting(HomestayId),

    /// Confirmation was attempted before a guest was chosen.
    #[error("No guest selected for homestay {0}")]
    NoGuestSelected(HomestayId),

    /// The chosen or typed guest is not in the directory.
    #[error("Guest not found: {0}")]
    GuestNotFound(String),

    /// Any other catalog failure.
    #[error(transparent)]
    Catalog(CatalogError),
}

impl RentalError {
    /// Maps a catalog failure on `unit_id` to the rental vocabulary.
    pub fn from_catalog(unit_id: HomestayId, e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(_) => RentalError::UnitNotFound(unit_id),
            CatalogError::AlreadyOccupied(id) => RentalError::UnitOccupied(id),
            CatalogError::NotOccupied(id) => RentalError::NotOccupied(id),
            other => RentalError::Catalog(other),
        }
    }
}
