//! # Catalog Store
//!
//! Owns the append-only source set of homestay units and the current derived view.
//!
//! ## Overview
//!
//! The source set is a [`ResourceStore`] keyed by unit id. Occupancy (current guest and
//! rental count) lives on the stored record, so it belongs to the unit identity rather than
//! to any particular view. The current view is only an ordered list of ids; every snapshot
//! handed out is projected from the store at call time.
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`HomestayUnit`]
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`actions`] - [`OccupancyAction`] and [`OccupancyActionResult`]
//!
//! ## Usage
//!
//! ```rust
//! use homestay_rental::catalog::CatalogStore;
//! use homestay_rental::model::HomestayDraft;
//!
//! let mut catalog = CatalogStore::default();
//! let id = catalog
//!     .add_unit(HomestayDraft::new("Lakeside Loft", "640000", "9 Hai Ba Trung St, Hue", "2"))
//!     .unwrap();
//! assert_eq!(catalog.view()[0].id, id);
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::ResourceStore;
use crate::model::{HomestayDraft, HomestayId, HomestayUnit, HomestayUpdate};
use tracing::{debug, info};

/// Source set plus current view.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    source: ResourceStore<HomestayUnit>,
    view: Vec<HomestayId>,
}

impl CatalogStore {
    /// Seeds the source set. The initial view is the whole source in seed order.
    pub fn new(units: impl IntoIterator<Item = HomestayUnit>) -> Result<Self, CatalogError> {
        let mut source = ResourceStore::new();
        for unit in units {
            source.insert(unit)?;
        }
        let view = source.ids().to_vec();
        debug!(size = source.len(), "Catalog seeded");
        Ok(Self { source, view })
    }

    /// Validates the draft and appends the new unit to both the source set and the
    /// current view. The new id is one past the largest existing id.
    pub fn add_unit(&mut self, draft: HomestayDraft) -> Result<HomestayId, CatalogError> {
        let id = self.source.create(draft)?;
        self.view.push(id);
        Ok(id)
    }

    /// Changes listing fields of an existing unit. Occupancy is not touched.
    pub fn update_unit(&mut self, id: HomestayId, update: HomestayUpdate) -> Result<HomestayUnit, CatalogError> {
        self.source.update(id, update)
    }

    /// Overwrites the current view with the order of `view`.
    ///
    /// Only the ids are kept: occupancy always comes from the source set, so a stale
    /// record cannot roll a rental back. Ids unknown to the source are dropped when the
    /// view is projected.
    pub fn replace_view(&mut self, view: Vec<HomestayUnit>) {
        self.view = view.into_iter().map(|unit| unit.id).collect();
        info!(size = self.view.len(), "View replaced");
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> Vec<HomestayUnit> {
        self.view
            .iter()
            .filter_map(|id| self.source.get(id))
            .cloned()
            .collect()
    }

    pub fn view_ids(&self) -> &[HomestayId] {
        &self.view
    }

    /// Snapshot of the full source set in insertion order.
    pub fn source(&self) -> Vec<HomestayUnit> {
        self.source.snapshot()
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn get(&self, id: HomestayId) -> Option<&HomestayUnit> {
        self.source.get(&id)
    }

    /// Puts `guest_name` in a vacant unit and returns the new rental count.
    pub fn occupy(&mut self, id: HomestayId, guest_name: impl Into<String>) -> Result<u32, CatalogError> {
        let action = OccupancyAction::Occupy { guest_name: guest_name.into() };
        match self.source.perform_action(id, action)? {
            OccupancyActionResult::Occupy { rental_count } => Ok(rental_count),
            OccupancyActionResult::Vacate { .. } => unreachable!("Occupy action must return Occupy result"),
        }
    }

    /// Empties an occupied unit and returns the guest who left.
    pub fn vacate(&mut self, id: HomestayId) -> Result<String, CatalogError> {
        match self.source.perform_action(id, OccupancyAction::Vacate)? {
            OccupancyActionResult::Vacate { previous_guest } => Ok(previous_guest),
            OccupancyActionResult::Occupy { .. } => unreachable!("Vacate action must return Vacate result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CatalogStore {
        CatalogStore::new([
            HomestayUnit::new(HomestayId(1), "Sunrise Retreat", 850000, "123 Beach Road, Nha Trang", 3),
            HomestayUnit::new(HomestayId(4), "Palm Garden House", 980000, "12 Tran Hung Dao St, Phu Quoc", 4),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_unit_appends_to_source_and_view() {
        let mut catalog = catalog();
        catalog.replace_view(Vec::new());

        let id = catalog
            .add_unit(HomestayDraft::from_values("Lakeside Loft", 640000, "9 Hai Ba Trung St, Hue", 2))
            .unwrap();

        assert_eq!(id, HomestayId(5));
        assert_eq!(catalog.view_ids(), &[HomestayId(5)]);
        assert_eq!(catalog.source_len(), 3);
    }

    #[test]
    fn test_seed_rejects_zero_id() {
        let zero = CatalogStore::new([HomestayUnit::new(HomestayId(0), "Loft", 500000, "Hue", 1)]);
        assert!(matches!(zero, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_add_unit_fails_when_ids_run_out() {
        let mut catalog =
            CatalogStore::new([HomestayUnit::new(HomestayId(u32::MAX), "Edge", 1, "B", 1)]).unwrap();

        let result = catalog.add_unit(HomestayDraft::new("Next", "1", "B", "1"));
        assert!(matches!(result, Err(CatalogError::Validation(_))));
        assert_eq!(catalog.source_len(), 1);
        assert_eq!(catalog.view_ids(), &[HomestayId(u32::MAX)]);
    }

    #[test]
    fn test_invalid_draft_changes_nothing() {
        let mut catalog = catalog();
        let result = catalog.add_unit(HomestayDraft::new("Loft", "", "Hue", "2"));
        assert!(matches!(result, Err(CatalogError::Validation(_))));
        assert_eq!(catalog.source_len(), 2);
        assert_eq!(catalog.view_ids().len(), 2);
    }

    #[test]
    fn test_view_reflects_occupancy_from_source() {
        let mut catalog = catalog();
        let palm = catalog.get(HomestayId(4)).unwrap().clone();
        catalog.replace_view(vec![palm]);

        assert_eq!(catalog.occupy(HomestayId(4), "Sophia Davis"), Ok(1));
        assert_eq!(catalog.view()[0].occupancy(), ("Sophia Davis", 1));

        assert_eq!(catalog.vacate(HomestayId(4)).as_deref(), Ok("Sophia Davis"));
        assert_eq!(catalog.view()[0].occupancy(), ("", 1));
    }

    #[test]
    fn test_replace_view_ignores_stale_occupancy() {
        let mut catalog = catalog();
        let stale = catalog.view();
        catalog.occupy(HomestayId(1), "John Smith").unwrap();

        catalog.replace_view(stale);
        assert_eq!(catalog.view()[0].occupancy(), ("John Smith", 1));
    }

    #[test]
    fn test_update_unit_keeps_occupancy() {
        let mut catalog = catalog();
        catalog.occupy(HomestayId(1), "John Smith").unwrap();

        let update = HomestayUpdate { price: Some(900000), ..Default::default() };
        let updated = catalog.update_unit(HomestayId(1), update).unwrap();
        assert_eq!(updated.price, 900000);
        assert_eq!(updated.occupancy(), ("John Smith", 1));

        let missing = catalog.update_unit(HomestayId(9), HomestayUpdate::default());
        assert_eq!(missing, Err(CatalogError::NotFound("homestay_9".into())));
    }
}
