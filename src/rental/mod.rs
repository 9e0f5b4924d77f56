//! # Rental State Machine
//!
//! Controls the lifecycle of a rental: **vacant → selecting a guest → occupied → vacant**.
//!
//! ## Overview
//!
//! A single [`RentalState`] cursor tracks which unit, if any, is in guest selection.
//! Transitions read and write the [`CatalogStore`] and validate guests against the
//! [`GuestDirectory`]; both are passed in per call rather than owned, so the machine can be
//! driven directly in tests.
//!
//! | Command | From | To |
//! |---|---|---|
//! | `begin_rental(u)` | any, `u` vacant | `SelectingGuest(u)` with no candidate |
//! | `choose_guest_candidate(g)` | `SelectingGuest(_)` | same unit, candidate `g` |
//! | `confirm_rental(u)` | `SelectingGuest(u)` with candidate | `Idle`, `u` occupied |
//! | `cancel_rental(u)` | `SelectingGuest(u)` | `Idle` |
//! | `rent_by_name(u, name)` | any, `u` vacant | `u` occupied; cursor cleared if it was on `u` |
//! | `checkout(u)` | any, `u` occupied | unchanged, `u` vacant |
//!
//! ## Structure
//!
//! - [`state`] - [`RentalState`]
//! - [`error`] - [`RentalError`]

pub mod error;
pub mod state;

pub use error::*;
pub use state::*;

use crate::catalog::CatalogStore;
use crate::guest_directory::GuestDirectory;
use crate::model::{GuestId, HomestayId, HomestayUnit};
use tracing::{debug, info, warn};

/// Owner of the rental cursor.
#[derive(Debug, Clone, Default)]
pub struct RentalMachine {
    state: RentalState,
}

impl RentalMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RentalState {
        self.state
    }

    /// Starts guest selection for a vacant unit, replacing any selection in progress.
    pub fn begin_rental(&mut self, catalog: &CatalogStore, unit_id: HomestayId) -> Result<RentalState, RentalError> {
        let unit = catalog.get(unit_id).ok_or(RentalError::UnitNotFound(unit_id))?;
        if unit.is_occupied() {
            warn!(unit = %unit_id, guest = %unit.current_guest_name, "Rental refused, unit occupied");
            return Err(RentalError::UnitOccupied(unit_id));
        }

        if let Some(previous) = self.state.selecting_unit().filter(|previous| *previous != unit_id) {
            debug!(unit = %unit_id, %previous, "Moving selection");
        }
        self.state = RentalState::SelectingGuest { unit_id, candidate: None };
        info!(unit = %unit_id, "Selecting guest");
        Ok(self.state)
    }

    /// Records `guest_id` as the candidate for the unit in selection.
    pub fn choose_guest_candidate(&mut self, guests: &GuestDirectory, guest_id: GuestId) -> Result<(), RentalError> {
        let RentalState::SelectingGuest { unit_id, candidate } = &mut self.state else {
            warn!(guest = %guest_id, "Candidate chosen with no rental in progress");
            return Err(RentalError::NoActiveSelection);
        };
        if guests.get(guest_id).is_none() {
            warn!(unit = %unit_id, guest = %guest_id, "Unknown guest");
            return Err(RentalError::GuestNotFound(guest_id.to_string()));
        }

        *candidate = Some(guest_id);
        debug!(unit = %unit_id, guest = %guest_id, "Candidate chosen");
        Ok(())
    }

    /// Commits the candidate: the unit gets the guest's name and one more rental.
    pub fn confirm_rental(
        &mut self,
        catalog: &mut CatalogStore,
        guests: &GuestDirectory,
        unit_id: HomestayId,
    ) -> Result<HomestayUnit, RentalError> {
        let candidate = match self.state {
            RentalState::SelectingGuest { unit_id: selecting, candidate } if selecting == unit_id => candidate,
            _ => {
                warn!(unit = %unit_id, state = ?self.state, "Confirm without selection");
                return Err(RentalError::NotSelecting(unit_id));
            }
        };
        let Some(guest_id) = candidate else {
            warn!(unit = %unit_id, "Confirm without guest");
            return Err(RentalError::NoGuestSelected(unit_id));
        };
        let guest = guests
            .get(guest_id)
            .ok_or_else(|| RentalError::GuestNotFound(guest_id.to_string()))?;

        let rental_count = catalog
            .occupy(unit_id, guest.name.clone())
            .map_err(|e| RentalError::from_catalog(unit_id, e))?;
        self.state = RentalState::Idle;
        info!(unit = %unit_id, guest = %guest.name, rental_count, "Rental confirmed");
        Self::snapshot(catalog, unit_id)
    }

    /// Abandons the selection on `unit_id`. The unit stays vacant.
    pub fn cancel_rental(&mut self, unit_id: HomestayId) -> Result<(), RentalError> {
        if self.state.selecting_unit() != Some(unit_id) {
            warn!(unit = %unit_id, state = ?self.state, "Cancel without selection");
            return Err(RentalError::NotSelecting(unit_id));
        }
        self.state = RentalState::Idle;
        info!(unit = %unit_id, "Rental cancelled");
        Ok(())
    }

    /// Rents a vacant unit to the guest whose name matches `typed_name`, trimmed and
    /// ignoring case. The stored name is the directory's spelling.
    pub fn rent_by_name(
        &mut self,
        catalog: &mut CatalogStore,
        guests: &GuestDirectory,
        unit_id: HomestayId,
        typed_name: &str,
    ) -> Result<HomestayUnit, RentalError> {
        if typed_name.trim().is_empty() {
            warn!(unit = %unit_id, "Rental by name without a name");
            return Err(RentalError::NoGuestSelected(unit_id));
        }
        let Some(guest) = guests.find_by_name(typed_name) else {
            warn!(unit = %unit_id, typed = %typed_name, "Unknown guest");
            return Err(RentalError::GuestNotFound(typed_name.trim().to_string()));
        };

        let rental_count = catalog
            .occupy(unit_id, guest.name.clone())
            .map_err(|e| RentalError::from_catalog(unit_id, e))?;
        if self.state.selecting_unit() == Some(unit_id) {
            self.state = RentalState::Idle;
        }
        info!(unit = %unit_id, guest = %guest.name, rental_count, "Rented by name");
        Self::snapshot(catalog, unit_id)
    }

    /// Empties an occupied unit. The rental count and the cursor are left alone.
    pub fn checkout(&self, catalog: &mut CatalogStore, unit_id: HomestayId) -> Result<HomestayUnit, RentalError> {
        let previous_guest = catalog
            .vacate(unit_id)
            .map_err(|e| RentalError::from_catalog(unit_id, e))?;
        info!(unit = %unit_id, guest = %previous_guest, "Checked out");
        Self::snapshot(catalog, unit_id)
    }

    fn snapshot(catalog: &CatalogStore, unit_id: HomestayId) -> Result<HomestayUnit, RentalError> {
        catalog.get(unit_id).cloned().ok_or(RentalError::UnitNotFound(unit_id))
    }
}
