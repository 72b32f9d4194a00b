//! Domain types shared across all Bistro services.
//!
//! Pure types and rules with no framework dependencies: billing math, date
//! ranges, pagination, wire enums and field validators.

#[macro_use]
mod wire;

pub mod billing;
pub mod date_range;
pub mod order;
pub mod pagination;
pub mod party;
pub mod product;
pub mod user;
pub mod validate;

pub use wire::UnknownVariant;
