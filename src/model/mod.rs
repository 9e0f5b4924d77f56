//! Pure data structures (DTOs) implementing the [`Entity`](crate::framework::Entity) trait.

pub mod filter;
pub mod guest;
pub mod homestay;

pub use filter::*;
pub use guest::*;
pub use homestay::*;
