//! Reservation ledger: stock soft-claimed by beverages still being poured.
//!
//! The ledger takes no decisions. Callers check availability before reserving.

mod actions;
pub mod entity;

pub use actions::*;
pub use entity::*;
