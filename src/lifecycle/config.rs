//! Seed configuration for a [`HomestaySystem`](super::HomestaySystem).
//!
//! The guest roster and the initial catalog are fixed for the life of the process. They
//! default to a built-in seed and can be replaced by a JSON document of the same shape:
//!
//! ```json
//! {
//!   "guests": [{ "id": 1, "name": "John Smith", "phone": "0901234567", "email": "john.smith@example.com" }],
//!   "homestays": [{ "id": 1, "name": "Sunrise Retreat", "price": 850000,
//!                   "address": "123 Beach Road, Nha Trang", "room_count": 3 }]
//! }
//! ```

use crate::model::{Guest, GuestId, HomestayId, HomestayUnit};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable naming a seed file for the demo binary.
pub const SEED_ENV_VAR: &str = "HOMESTAY_SEED";

/// Errors raised while loading a seed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Startup data: the guest directory and the source set of homestays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub homestays: Vec<HomestayUnit>,
}

impl SystemConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// An empty seed: no guests, no homestays.
    pub fn empty() -> Self {
        Self { guests: Vec::new(), homestays: Vec::new() }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        let guests = vec![
            Guest::new(GuestId(1), "John Smith", "0901234567", "john.smith@example.com"),
            Guest::new(GuestId(2), "Emily Johnson", "0912345678", "emily.johnson@example.com"),
            Guest::new(GuestId(3), "Michael Brown", "0923456789", "michael.brown@example.com"),
            Guest::new(GuestId(4), "Sophia Davis", "0934567890", "sophia.davis@example.com"),
            Guest::new(GuestId(5), "Daniel Wilson", "0945678901", "daniel.wilson@example.com"),
        ];
        let homestays = vec![
            HomestayUnit::new(HomestayId(1), "Sunrise Retreat", 850000, "123 Beach Road, Nha Trang", 3),
            HomestayUnit::new(HomestayId(2), "Mountain Breeze Villa", 1200000, "45 Ly Thuong Kiet St, Da Lat", 5),
            HomestayUnit::new(HomestayId(3), "Riverside Nest", 750000, "78 Nguyen Du St, Hoi An", 2),
            HomestayUnit::new(HomestayId(4), "Palm Garden House", 980000, "12 Tran Hung Dao St, Phu Quoc", 4),
            HomestayUnit::new(HomestayId(5), "Skyline Studio", 1100000, "89 Le Loi St, Da Nang", 1),
        ];
        Self { guests, homestays }
    }
}
