//! # Drink Dispenser
//!
//! A multi-outlet beverage dispenser that pours several orders at once from
//! one shared ingredient inventory.
//!
//! ## Components
//!
//! - **Inventory store** - actor owning the available quantity of every ingredient → [`IngredientStock`], [`InventoryClient`]
//! - **Reservation ledger** - actor owning the quantity soft-claimed by beverages in flight → [`Reservation`], [`ReservationClient`]
//! - **Lock registry** - one async mutex per ingredient, created lazily → [`LockRegistry`]
//! - **Engine** - fixed pool of outlets running reserve, commit and release for each beverage → [`Dispenser`]
//! - **System** - startup, stocking and graceful shutdown → [`DispenserSystem`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use drink_dispenser::{Beverage, DispenserConfig, DispenserSystem, Ingredient};
//!
//! # async fn example() -> Result<(), drink_dispenser::DispenserError> {
//! let system = DispenserSystem::start(DispenserConfig::new(2))?;
//! system.stock([Ingredient::new("hot_water", 500), Ingredient::new("tea_leaves", 30)]).await?;
//!
//! let tea = Beverage::from_pairs("hot_tea", [("hot_water", 200), ("tea_leaves", 10)]);
//! let mut outcomes = system.dispenser.pour_drinks(vec![tea]).await;
//! while let Some(outcome) = outcomes.recv().await {
//!     println!("{outcome}");
//! }
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod dispenser;
pub mod domain;
pub mod error;
pub mod inventory_actor;
pub mod lock_registry;
pub mod reservation_actor;
pub mod retry;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, DispenserSystem};
pub use clients::{InventoryClient, ReservationClient};
pub use config::{ConfigError, MachineConfig};
pub use dispenser::{Dispenser, DispenserConfig};
pub use domain::{Beverage, Ingredient, PourOutcome, PourStatus, RejectReason};
pub use error::DispenserError;
pub use inventory_actor::IngredientStock;
pub use lock_registry::LockRegistry;
pub use reservation_actor::Reservation;
pub use retry::RetryPolicy;
