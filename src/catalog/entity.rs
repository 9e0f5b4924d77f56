//! Entity trait implementation for the HomestayUnit domain type.
//!
//! Holds the field validation shared by add-unit, update-unit and seeding, plus the
//! occupancy actions.

use super::actions::{OccupancyAction, OccupancyActionResult};
use super::CatalogError;
use crate::framework::Entity;
use crate::model::{HomestayDraft, HomestayId, HomestayUnit, HomestayUpdate};

impl Entity for HomestayUnit {
    type Id = HomestayId;
    type Create = HomestayDraft;
    type Update = HomestayUpdate;
    type Action = OccupancyAction;
    type ActionResult = OccupancyActionResult;
    type Error = CatalogError;

    fn id(&self) -> HomestayId {
        self.id
    }

    /// Parses a form draft into a vacant unit with no rentals.
    fn from_create_params(id: HomestayId, draft: HomestayDraft) -> Result<Self, CatalogError> {
        let name = required_text(&draft.name, "name")?;
        let price = required_number::<u64>(&draft.price, "price")?;
        let address = required_text(&draft.address, "address")?;
        let room_count = required_number::<u32>(&draft.room_count, "room count")?;
        Ok(Self::new(id, name, price, address, room_count))
    }

    fn on_create(&mut self) -> Result<(), CatalogError> {
        if self.id.0 == 0 {
            return Err(CatalogError::Validation("homestay id must be positive".into()));
        }
        required_text(&self.name, "name")?;
        required_text(&self.address, "address")?;
        positive_rooms(self.room_count)
    }

    /// Applies the provided fields. Anything invalid rejects the whole update.
    fn on_update(&mut self, update: HomestayUpdate) -> Result<(), CatalogError> {
        if let Some(name) = update.name {
            self.name = required_text(&name, "name")?;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(address) = update.address {
            self.address = required_text(&address, "address")?;
        }
        if let Some(room_count) = update.room_count {
            positive_rooms(room_count)?;
            self.room_count = room_count;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: OccupancyAction) -> Result<OccupancyActionResult, CatalogError> {
        match action {
            OccupancyAction::Occupy { guest_name } => {
                if self.is_occupied() {
                    return Err(CatalogError::AlreadyOccupied(self.id));
                }
                let guest_name = required_text(&guest_name, "guest name")?;
                let rental_count = self
                    .rental_count
                    .checked_add(1)
                    .ok_or_else(|| CatalogError::Validation(format!("{} rental count overflow", self.id)))?;
                self.current_guest_name = guest_name;
                self.rental_count = rental_count;
                Ok(OccupancyActionResult::Occupy { rental_count })
            }
            OccupancyAction::Vacate => {
                if self.is_vacant() {
                    return Err(CatalogError::NotOccupied(self.id));
                }
                let previous_guest = std::mem::take(&mut self.current_guest_name);
                Ok(OccupancyActionResult::Vacate { previous_guest })
            }
        }
    }
}

fn required_text(value: &str, field: &str) -> Result<String, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

fn required_number<N: std::str::FromStr>(value: &str, field: &str) -> Result<N, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::Validation(format!("{field} is required")));
    }
    trimmed
        .parse()
        .map_err(|_| CatalogError::Validation(format!("{field} must be a whole number, got {trimmed:?}")))
}

fn positive_rooms(room_count: u32) -> Result<(), CatalogError> {
    if room_count == 0 {
        return Err(CatalogError::Validation("room count must be at least 1".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> HomestayDraft {
        HomestayDraft::new(" Lakeside Loft ", "640000", "9 Hai Ba Trung St, Hue", "2")
    }

    #[test]
    fn test_create_from_draft_trims_and_parses() {
        let unit = HomestayUnit::from_create_params(HomestayId(6), draft()).unwrap();
        assert_eq!(unit.name, "Lakeside Loft");
        assert_eq!(unit.price, 640000);
        assert_eq!(unit.room_count, 2);
        assert!(unit.is_vacant());
        assert_eq!(unit.rental_count, 0);
    }

    #[test]
    fn test_create_rejects_missing_or_unparseable_fields() {
        let cases = [
            HomestayDraft { name: " ".into(), ..draft() },
            HomestayDraft { price: "".into(), ..draft() },
            HomestayDraft { price: "12.5".into(), ..draft() },
            HomestayDraft { address: "".into(), ..draft() },
            HomestayDraft { room_count: "two".into(), ..draft() },
        ];
        for case in cases {
            let result = HomestayUnit::from_create_params(HomestayId(6), case.clone());
            assert!(matches!(result, Err(CatalogError::Validation(_))), "{case:?}");
        }

        let mut no_rooms = HomestayUnit::from_create_params(HomestayId(6), HomestayDraft { room_count: "0".into(), ..draft() }).unwrap();
        assert!(no_rooms.on_create().is_err());
    }

    #[test]
    fn test_occupy_then_vacate() {
        let mut unit = HomestayUnit::new(HomestayId(1), "Sunrise Retreat", 850000, "123 Beach Road, Nha Trang", 3);

        let occupied = unit.handle_action(OccupancyAction::Occupy { guest_name: "John Smith".into() });
        assert_eq!(occupied, Ok(OccupancyActionResult::Occupy { rental_count: 1 }));
        assert_eq!(unit.occupancy(), ("John Smith", 1));

        let again = unit.handle_action(OccupancyAction::Occupy { guest_name: "Emily Johnson".into() });
        assert_eq!(again, Err(CatalogError::AlreadyOccupied(HomestayId(1))));

        let vacated = unit.handle_action(OccupancyAction::Vacate);
        assert_eq!(vacated, Ok(OccupancyActionResult::Vacate { previous_guest: "John Smith".into() }));
        assert_eq!(unit.occupancy(), ("", 1));

        assert_eq!(unit.handle_action(OccupancyAction::Vacate), Err(CatalogError::NotOccupied(HomestayId(1))));
    }
}
