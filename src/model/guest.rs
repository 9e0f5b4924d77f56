use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GuestId(pub u32);

impl From<u32> for GuestId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<GuestId> for u32 {
    fn from(id: GuestId) -> Self {
        id.0
    }
}

impl Display for GuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "guest_{}", self.0)
    }
}

/// Represents a known guest.
///
/// # Entity Framework
/// This struct implements the [`Entity`](crate::framework::Entity) trait so the
/// [`GuestDirectory`](crate::guest_directory::GuestDirectory) can keep it in a
/// [`ResourceStore`](crate::framework::ResourceStore). Guests are seeded once and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl Guest {
    /// Creates a new Guest instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - Display name, also the lookup key for typed-in rentals
    /// * `phone` - Contact phone, display only
    /// * `email` - Contact email, display only
    pub fn new(
        id: GuestId,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Whether `typed` names this guest, ignoring surrounding whitespace and case.
    pub fn matches_name(&self, typed: &str) -> bool {
        self.name.to_lowercase() == typed.trim().to_lowercase()
    }
}
