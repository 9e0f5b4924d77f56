use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Homestay units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HomestayId(pub u32);

impl From<u32> for HomestayId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<HomestayId> for u32 {
    fn from(id: HomestayId) -> Self {
        id.0
    }
}

impl Display for HomestayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "homestay_{}", self.0)
    }
}

/// Represents a rentable homestay listing together with its occupancy.
///
/// `current_guest_name` empty means vacant. `rental_count` only ever grows, by one per
/// confirmed rental; checkout leaves it alone.
///
/// # Entity Framework
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be managed by a [`ResourceStore`](crate::framework::ResourceStore).
///
/// See [`impl Entity for HomestayUnit`](#impl-Entity-for-HomestayUnit) for details on:
/// - Creation parameters ([`HomestayDraft`])
/// - Update parameters ([`HomestayUpdate`])
/// - Custom actions ([`OccupancyAction`](crate::catalog::OccupancyAction))
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomestayUnit {
    pub id: HomestayId,
    pub name: String,
    pub price: u64,
    pub address: String,
    pub room_count: u32,
    #[serde(default)]
    pub current_guest_name: String,
    #[serde(default)]
    pub rental_count: u32,
}

impl HomestayUnit {
    /// Creates a new, vacant HomestayUnit that has never been rented.
    pub fn new(
        id: HomestayId,
        name: impl Into<String>,
        price: u64,
        address: impl Into<String>,
        room_count: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            address: address.into(),
            room_count,
            current_guest_name: String::new(),
            rental_count: 0,
        }
    }

    pub fn is_vacant(&self) -> bool {
        self.current_guest_name.is_empty()
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_vacant()
    }

    /// The `(guest name, rental count)` pair that must survive view changes.
    pub fn occupancy(&self) -> (&str, u32) {
        (&self.current_guest_name, self.rental_count)
    }
}

/// Payload for adding a unit, as entered in a form.
///
/// Numeric fields are kept as text so that parsing failures surface as validation errors
/// from the catalog instead of at the call site.
#[derive(Debug, Clone, Default)]
pub struct HomestayDraft {
    pub name: String,
    pub price: String,
    pub address: String,
    pub room_count: String,
}

impl HomestayDraft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        address: impl Into<String>,
        room_count: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            address: address.into(),
            room_count: room_count.into(),
        }
    }

    /// Builds a draft from already-typed values.
    pub fn from_values(name: impl Into<String>, price: u64, address: impl Into<String>, room_count: u32) -> Self {
        Self::new(name, price.to_string(), address, room_count.to_string())
    }
}

/// Payload for updating an existing unit. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct HomestayUpdate {
    pub name: Option<String>,
    pub price: Option<u64>,
    pub address: Option<String>,
    pub room_count: Option<u32>,
}
