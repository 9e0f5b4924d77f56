//! Generic entity framework for in-memory resource management.
//!
//! This module provides the building blocks for type-safe resource stores
//! that manage entities with create/update operations and custom actions.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that resource types implement to be managed by a store
//! - [`ResourceStore`] - Generic store with id assignment and atomic mutation
//! - [`FrameworkError`] - Common error types

pub mod entity;
pub mod error;
pub mod store;

// Re-export core types for convenience
pub use entity::Entity;
pub use error::FrameworkError;
pub use store::ResourceStore;
