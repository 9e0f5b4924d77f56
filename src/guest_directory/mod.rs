//! # Guest Directory
//!
//! The static, read-only set of known guests. It is consulted to validate a rental: a
//! candidate picked by id, or a name typed in at the desk, must resolve to a guest here.
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`Guest`]
//! - [`error`] - [`GuestError`] type for type-safe error handling

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::ResourceStore;
use crate::model::{Guest, GuestId};
use tracing::debug;

/// Read-only guest roster, in seed order.
#[derive(Debug, Clone, Default)]
pub struct GuestDirectory {
    store: ResourceStore<Guest>,
}

impl GuestDirectory {
    /// Builds the directory from seed records. Fails on an empty name or a repeated id.
    pub fn new(guests: impl IntoIterator<Item = Guest>) -> Result<Self, GuestError> {
        let mut store = ResourceStore::new();
        for guest in guests {
            store.insert(guest)?;
        }
        debug!(size = store.len(), "Guest directory seeded");
        Ok(Self { store })
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get(&self, id: GuestId) -> Option<&Guest> {
        self.store.get(&id)
    }

    /// Finds the guest whose name equals `typed`, trimmed and ignoring case.
    pub fn find_by_name(&self, typed: &str) -> Option<&Guest> {
        if typed.trim().is_empty() {
            return None;
        }
        self.store.iter().find(|guest| guest.matches_name(typed))
    }

    /// All guests in seed order.
    pub fn list(&self) -> Vec<Guest> {
        self.store.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> GuestDirectory {
        GuestDirectory::new([
            Guest::new(GuestId(1), "John Smith", "0901234567", "john.smith@example.com"),
            Guest::new(GuestId(2), "Emily Johnson", "0912345678", "emily.johnson@example.com"),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_by_id_and_name() {
        let guests = directory();
        assert_eq!(guests.get(GuestId(2)).map(|g| g.name.as_str()), Some("Emily Johnson"));
        assert!(guests.get(GuestId(9)).is_none());
        assert_eq!(guests.find_by_name(" john smith ").map(|g| g.id), Some(GuestId(1)));
        assert!(guests.find_by_name("   ").is_none());
        assert!(guests.find_by_name("John").is_none());
    }

    #[test]
    fn test_list_keeps_seed_order() {
        let ids: Vec<_> = directory().list().into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![GuestId(1), GuestId(2)]);
    }

    #[test]
    fn test_seed_rejects_duplicates_and_blank_names() {
        let dup = GuestDirectory::new([
            Guest::new(GuestId(1), "A", "", ""),
            Guest::new(GuestId(1), "B", "", ""),
        ]);
        assert_eq!(dup.unwrap_err(), GuestError::DuplicateId("guest_1".into()));

        let blank = GuestDirectory::new([Guest::new(GuestId(3), "  ", "", "")]);
        assert!(matches!(blank, Err(GuestError::Validation(_))));

        let zero = GuestDirectory::new([Guest::new(GuestId(0), "Ana Lee", "", "")]);
        assert!(matches!(zero, Err(GuestError::Validation(_))));
    }
}
