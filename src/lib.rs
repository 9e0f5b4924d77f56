//! # Homestay Rental
//!
//! > **An in-memory rental desk for a fixed catalog of homestays and a fixed guest roster.**
//!
//! The crate keeps a working view of the catalog (filtered and sorted from an append-only
//! source set) and runs each unit through a guest-validated rental lifecycle:
//! **vacant → selecting a guest → occupied → vacant**.
//!
//! ## 🏗️ Design Notes
//!
//! ### 1. Occupancy belongs to the unit, not the view
//! Units live in an id-keyed [`ResourceStore`](framework::ResourceStore). The current view
//! is just an ordered list of ids, so search, sort and reset can never drop a guest or a
//! rental count; they only change which ids are shown and in what order.
//!
//! ### 2. Type-Safe Error Handling
//! Each component defines its own error type ([`CatalogError`](catalog::CatalogError),
//! [`RentalError`](rental::RentalError), [`GuestError`](guest_directory::GuestError)).
//! Every error rejects one command and leaves state exactly as it was; there is no fatal
//! state.
//!
//! ### 3. Explicit rental state
//! The single shared selection cursor is a tagged [`RentalState`](rental::RentalState), so
//! "at most one unit in guest selection" is enforced by the type.
//!
//! ### 4. Concurrency Model
//! None. Commands are synchronous and run to completion one at a time on the caller's
//! thread; nothing is spawned and nothing is locked.
//!
//! ### 5. Observability
//! We use `tracing` everywhere with structured fields. See the [`lifecycle::tracing`]
//! module for details.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - the generic [`Entity`](framework::Entity) trait and store
//! - [`model`] - [`Guest`](model::Guest), [`HomestayUnit`](model::HomestayUnit), drafts and [`FilterCriteria`](model::FilterCriteria)
//! - [`guest_directory`] - read-only guest lookup
//! - [`catalog`] - source set, current view and occupancy actions
//! - [`view_engine`] - pure search / sort / reset
//! - [`rental`] - the rental state machine
//! - [`lifecycle`] - [`HomestaySystem`](lifecycle::HomestaySystem), seed config and tracing setup
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the scripted demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Use a custom seed
//! cargo run -- seed.json
//! ```

pub mod catalog;
pub mod framework;
pub mod guest_directory;
pub mod lifecycle;
pub mod model;
pub mod rental;
pub mod view_engine;
