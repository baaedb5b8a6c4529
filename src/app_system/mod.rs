//! System orchestration, startup, and shutdown logic.

pub mod dispenser_system;
pub mod telemetry;

pub use dispenser_system::*;
pub use telemetry::*;
