//! # System Lifecycle & Orchestration
//!
//! This module wires the pieces together and gives the presentation layer one object to
//! talk to.
//!
//! **Key Responsibilities:**
//! 1. **Seeding** - build the guest directory and catalog from a [`SystemConfig`]
//! 2. **Dependency Passing** - hand the catalog and directory to the rental machine per call
//! 3. **Command Surface** - [`HomestaySystem`] exposes every user command
//! 4. **Observability Setup** - [`setup_tracing`]
//!
//! ```rust,ignore
//! setup_tracing();
//! let mut system = HomestaySystem::new(SystemConfig::load("seed.json")?)?;
//! system.search(FilterCriteria::from_inputs("nest", "", "", "")?);
//! system.rent_by_name(HomestayId(3), "emily johnson")?;
//! ```

pub mod config;
pub mod homestay_system;
pub mod tracing;

pub use self::config::*;
pub use self::homestay_system::*;
pub use self::tracing::setup_tracing;
