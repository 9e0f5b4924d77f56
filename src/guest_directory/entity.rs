//! Entity trait implementation for the Guest domain type.
//!
//! Guests are read-only after seeding, so there is nothing to update and no custom action.

use super::GuestError;
use crate::framework::Entity;
use crate::model::{Guest, GuestId};

impl Entity for Guest {
    type Id = GuestId;
    type Create = Guest;
    type Update = (); // Guests are never mutated
    type Action = ();
    type ActionResult = ();
    type Error = GuestError;

    fn id(&self) -> GuestId {
        self.id
    }

    /// Guests arrive fully formed from the seed; the store-assigned id wins.
    fn from_create_params(id: GuestId, params: Guest) -> Result<Self, GuestError> {
        Ok(Self { id, ..params })
    }

    fn on_create(&mut self) -> Result<(), GuestError> {
        if self.id.0 == 0 {
            return Err(GuestError::Validation("guest id must be positive".into()));
        }
        if self.name.trim().is_empty() {
            return Err(GuestError::Validation(format!("{} has an empty name", self.id)));
        }
        Ok(())
    }

    fn on_update(&mut self, _update: ()) -> Result<(), GuestError> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), GuestError> {
        Ok(())
    }
}
