//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Store Operations**: Create, Update and occupancy Actions, tagged with `entity_type`
//! - **Commands**: one span per [`HomestaySystem`](super::HomestaySystem) command
//! - **Rejections**: every refused command logs a `WARN` with the unit and the reason
//!
//! ## Usage Examples
//!
//! ```bash
//! # Committed changes only
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=homestay_rental::rental=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`** a rental session reads like:
//!
//! ```text
//! INFO search: View replaced size=1
//! INFO begin_rental: Selecting guest unit=homestay_3
//! WARN confirm_rental: Confirm without guest unit=homestay_3
//! INFO confirm_rental: Action ok entity_type="HomestayUnit" id=homestay_3
//! INFO confirm_rental: Rental confirmed unit=homestay_3 guest=Emily Johnson rental_count=1
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once, from the binary; tests leave logging off.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type and unit fields identify the source
        .compact()
        .init();
}
