//! Typed handles over the store actors.

#[macro_use]
mod macros;
pub mod inventory_client;
pub mod reservation_client;

pub use inventory_client::*;
pub use reservation_client::*;
