//! Custom actions for homestay units.
//!
//! This module defines the occupancy operations that can be performed on a
//! [`HomestayUnit`](crate::model::HomestayUnit) beyond create and update.
//! They are handled by [`Entity::handle_action`](crate::framework::Entity::handle_action).

/// Occupancy changes for a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccupancyAction {
    /// Assigns a guest to a vacant unit and counts the rental.
    ///
    /// # Errors
    /// Fails if the unit already has a guest.
    Occupy { guest_name: String },
    /// Removes the current guest. The rental count is kept.
    ///
    /// # Errors
    /// Fails if the unit is vacant.
    Vacate,
}

/// Results from OccupancyActions - variants match 1:1 with OccupancyAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccupancyActionResult {
    /// The unit's rental count after the rental was recorded.
    Occupy { rental_count: u32 },
    /// The guest who left.
    Vacate { previous_guest: String },
}
