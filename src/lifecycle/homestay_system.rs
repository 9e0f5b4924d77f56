use super::config::{ConfigError, SystemConfig};
use crate::catalog::{CatalogError, CatalogStore};
use crate::guest_directory::{GuestDirectory, GuestError};
use crate::model::{FilterCriteria, Guest, GuestId, HomestayDraft, HomestayId, HomestayUnit, HomestayUpdate};
use crate::rental::{RentalError, RentalMachine, RentalState};
use crate::view_engine;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Errors raised while building a [`HomestaySystem`].
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid guest seed: {0}")]
    Guest(#[from] GuestError),

    #[error("Invalid homestay seed: {0}")]
    Catalog(#[from] CatalogError),
}

/// The command surface of the rental desk.
///
/// `HomestaySystem` is responsible for:
/// - **Wiring**: owning the guest directory, the catalog store and the rental cursor
/// - **View Commands**: search, sort and reset, installed into the catalog
/// - **Rental Commands**: forwarding to the [`RentalMachine`] with the catalog and
///   directory it needs
///
/// Every command runs to completion before returning; a presentation layer reads the
/// result from [`view`](Self::view).
///
/// # Example
///
/// ```rust
/// use homestay_rental::lifecycle::HomestaySystem;
/// use homestay_rental::model::{FilterCriteria, GuestId, HomestayId};
///
/// let mut system = HomestaySystem::with_default_seed().unwrap();
/// let found = system.search(FilterCriteria::any().with_price(750000));
/// assert_eq!(found[0].id, HomestayId(3));
///
/// system.begin_rental(HomestayId(3)).unwrap();
/// system.choose_guest_candidate(GuestId(2)).unwrap();
/// let unit = system.confirm_rental(HomestayId(3)).unwrap();
/// assert_eq!(unit.current_guest_name, "Emily Johnson");
/// ```
#[derive(Debug, Clone)]
pub struct HomestaySystem {
    guests: GuestDirectory,
    catalog: CatalogStore,
    rental: RentalMachine,
    criteria: FilterCriteria,
    sort_ascending: bool,
}

impl HomestaySystem {
    /// Seeds the directory and the catalog from `config`.
    pub fn new(config: SystemConfig) -> Result<Self, SystemError> {
        let guests = GuestDirectory::new(config.guests)?;
        let catalog = CatalogStore::new(config.homestays)?;
        info!(guests = guests.len(), homestays = catalog.source_len(), "System ready");

        Ok(Self {
            guests,
            catalog,
            rental: RentalMachine::new(),
            criteria: FilterCriteria::default(),
            sort_ascending: true,
        })
    }

    pub fn with_default_seed() -> Result<Self, SystemError> {
        Self::new(SystemConfig::default())
    }

    // --- Reads ---

    pub fn view(&self) -> Vec<HomestayUnit> {
        self.catalog.view()
    }

    pub fn source(&self) -> Vec<HomestayUnit> {
        self.catalog.source()
    }

    pub fn unit(&self, id: HomestayId) -> Option<HomestayUnit> {
        self.catalog.get(id).cloned()
    }

    pub fn guests(&self) -> Vec<Guest> {
        self.guests.list()
    }

    /// Criteria of the last search; empty after a reset.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn rental_state(&self) -> RentalState {
        self.rental.state()
    }

    /// Direction the next [`toggle_sort`](Self::toggle_sort) will use.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    // --- View commands ---

    /// Shows the source units matching `criteria` and remembers the criteria.
    #[instrument(skip(self))]
    pub fn search(&mut self, criteria: FilterCriteria) -> Vec<HomestayUnit> {
        let view = view_engine::search(&self.catalog.source(), &criteria);
        debug!(matched = view.len(), "Search");
        self.catalog.replace_view(view.clone());
        self.criteria = criteria;
        view
    }

    /// Sorts the current view by price in the given direction.
    #[instrument(skip(self))]
    pub fn sort(&mut self, ascending: bool) -> Vec<HomestayUnit> {
        let (view, next) = view_engine::sort(&self.catalog.view(), ascending);
        self.catalog.replace_view(view.clone());
        self.sort_ascending = next;
        view
    }

    /// Sorts with the held direction, then flips it.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) -> Vec<HomestayUnit> {
        self.sort(self.sort_ascending)
    }

    /// Shows every unit in source order and clears the search criteria.
    /// Occupancy is untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Vec<HomestayUnit> {
        let view = view_engine::reset(&self.catalog.source(), &self.catalog.view());
        self.catalog.replace_view(view.clone());
        self.criteria = FilterCriteria::default();
        view
    }

    // --- Catalog commands ---

    #[instrument(skip(self))]
    pub fn add_unit(&mut self, draft: HomestayDraft) -> Result<HomestayId, CatalogError> {
        self.catalog.add_unit(draft)
    }

    #[instrument(skip(self))]
    pub fn update_unit(&mut self, id: HomestayId, update: HomestayUpdate) -> Result<HomestayUnit, CatalogError> {
        self.catalog.update_unit(id, update)
    }

    // --- Rental commands ---

    #[instrument(skip(self))]
    pub fn begin_rental(&mut self, unit_id: HomestayId) -> Result<RentalState, RentalError> {
        self.rental.begin_rental(&self.catalog, unit_id)
    }

    #[instrument(skip(self))]
    pub fn choose_guest_candidate(&mut self, guest_id: GuestId) -> Result<(), RentalError> {
        self.rental.choose_guest_candidate(&self.guests, guest_id)
    }

    #[instrument(skip(self))]
    pub fn confirm_rental(&mut self, unit_id: HomestayId) -> Result<HomestayUnit, RentalError> {
        self.rental.confirm_rental(&mut self.catalog, &self.guests, unit_id)
    }

    #[instrument(skip(self))]
    pub fn cancel_rental(&mut self, unit_id: HomestayId) -> Result<(), RentalError> {
        self.rental.cancel_rental(unit_id)
    }

    #[instrument(skip(self))]
    pub fn rent_by_name(&mut self, unit_id: HomestayId, typed_name: &str) -> Result<HomestayUnit, RentalError> {
        self.rental.rent_by_name(&mut self.catalog, &self.guests, unit_id, typed_name)
    }

    #[instrument(skip(self))]
    pub fn checkout(&mut self, unit_id: HomestayId) -> Result<HomestayUnit, RentalError> {
        self.rental.checkout(&mut self.catalog, unit_id)
    }
}
