//! # Entity Trait
//!
//! The `Entity` trait defines the contract that every resource (Guest, HomestayUnit, …) must
//! implement to be managed by the generic [`ResourceStore`](crate::framework::ResourceStore).
//!
//! # Architecture Note
//! By defining a contract that all our resource types must satisfy, the store logic
//! (id assignment, lookup, atomic mutation, logging) is written *once* and reused everywhere.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! A `HomestayUnit` requires a `HomestayDraft` payload, and you can't accidentally hand it
//! a guest record. The compiler prevents this class of bugs entirely.
//!
//! # Provided Methods (Hooks)
//! [`Entity::on_create`] has a default implementation that does nothing (`Ok(())`).

use crate::framework::FrameworkError;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a `ResourceStore`.
///
/// Hooks are synchronous: every command runs to completion before the next one is accepted.
pub trait Entity: Clone + Debug + 'static {
    /// The unique identifier for this entity.
    /// Round-trips through `u32` so the store can assign `max(id) + 1`.
    type Id: Eq + Ord + Hash + Copy + Display + Debug + From<u32> + Into<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Debug;

    /// The data required to update an existing instance.
    type Update: Debug;

    /// Enum representing resource-specific operations (e.g., `Occupy`).
    type Action: Debug;

    /// The result type returned by custom actions.
    type ActionResult: Debug;

    /// The error type for this entity.
    ///
    /// Store failures convert into it via `From`.
    type Error: std::error::Error + From<FrameworkError> + 'static;

    /// The identifier this entity was stored under.
    fn id(&self) -> Self::Id;

    /// Construct the full Entity from the ID and Payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the entity is constructed and before it is stored.
    /// Also runs for seeded records, so it is the place for invariant checks.
    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    ///
    /// The store invokes this on a scratch copy; returning an error discards every change.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Handle a custom resource-specific action. Same scratch-copy rule as `on_update`.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
