use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::clients::{InventoryClient, ReservationClient};
use crate::config::MachineConfig;
use crate::dispenser::{Dispenser, DispenserConfig};
use crate::domain::Ingredient;
use crate::error::{DispenserError, Result};
use crate::inventory_actor::IngredientStock;
use crate::reservation_actor::Reservation;

const STORE_BUFFER_SIZE: usize = 32;

/// The running dispenser: both store actors plus the engine wired to them.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct DispenserSystem {
    pub dispenser: Dispenser,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DispenserSystem {
    /// Spawns the store actors. Must be called inside a tokio runtime.
    ///
    /// # Errors
    /// Returns `InvalidOutletCount` for a config with zero outlets; no actor is left running.
    pub fn start(config: DispenserConfig) -> Result<Self> {
        if config.outlets == 0 {
            return Err(DispenserError::InvalidOutletCount(0));
        }

        // 1. Inventory store
        let (inventory_actor, inventory_client) = ResourceActor::<IngredientStock>::new("inventory", STORE_BUFFER_SIZE);
        let inventory_handle = tokio::spawn(inventory_actor.run());

        // 2. Reservation ledger
        let (reservation_actor, reservation_client) = ResourceActor::<Reservation>::new("reservations", STORE_BUFFER_SIZE);
        let reservation_handle = tokio::spawn(reservation_actor.run());

        // 3. Engine
        let dispenser = Dispenser::new(
            config,
            InventoryClient::new(inventory_client),
            ReservationClient::new(reservation_client),
        )?;
        info!(outlets = dispenser.outlets(), "Dispenser system started");

        Ok(Self {
            dispenser,
            handles: vec![inventory_handle, reservation_handle],
        })
    }

    /// Starts a system sized for `machine` and loads its starting stock.
    pub async fn from_machine(machine: &MachineConfig) -> Result<Self> {
        let system = Self::start(machine.dispenser_config())?;
        system.stock(machine.stock()).await?;
        Ok(system)
    }

    /// Refills every given ingredient.
    pub async fn stock(&self, ingredients: impl IntoIterator<Item = Ingredient>) -> Result<()> {
        for ingredient in ingredients {
            self.dispenser.refill(ingredient).await?;
        }
        Ok(())
    }

    /// Stops the store actors and waits for them to exit.
    ///
    /// Actors stop once every client is gone, so clones of the dispenser
    /// handed out earlier must be dropped first.
    pub async fn shutdown(self) -> Result<()> {
        info!("Shutting down dispenser system...");
        drop(self.dispenser);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(DispenserError::ActorCommunication(format!("actor task failed: {e}")));
            }
        }

        info!("Dispenser system shutdown complete.");
        Ok(())
    }
}
