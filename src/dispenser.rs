//! The order fulfilment engine.
//!
//! Every beverage goes through the same protocol on whichever outlet picks it
//! up:
//!
//! 1. **Reserve** each requirement in order under that ingredient's lock.
//!    A requirement is reserved only when `available - reserved` covers it.
//!    When total stock would cover it but part is claimed by other in-flight
//!    beverages the attempt fails as retryable; otherwise as insufficient.
//! 2. **Commit** by consuming every requirement from the inventory.
//! 3. **Release** every reservation taken in step 1, whatever happened.
//!    A release failure replaces the attempt's result.
//!
//! The whole attempt is retried under a [`RetryPolicy`], which only repeats
//! transient contention.
//!
//! Consumes that already happened are not refilled if a later consume in the
//! same commit fails. Reservations guarantee sufficiency moments earlier, so
//! such a failure means the inventory changed outside the protocol.

use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex as AsyncMutex};
use tokio::task::JoinSet;
use tracing::{debug, error, info, info_span, instrument, warn, Instrument};

use crate::clients::{InventoryClient, ReservationClient};
use crate::domain::{Beverage, Ingredient, PourOutcome};
use crate::error::{DispenserError, Result};
use crate::lock_registry::LockRegistry;
use crate::retry::{retry_if, RetryPolicy};

/// Capacity of the queue feeding beverages to outlets.
pub const DEFAULT_QUEUE_CAPACITY: usize = 5;

/// Engine tuning.
#[derive(Debug, Clone)]
pub struct DispenserConfig {
    /// Number of outlets, i.e. beverages poured concurrently
    pub outlets: usize,
    pub retry: RetryPolicy,
    /// Beverages buffered between the submitting task and the outlets
    pub queue_capacity: usize,
}

impl DispenserConfig {
    pub fn new(outlets: usize) -> Self {
        Self {
            outlets,
            retry: RetryPolicy::default(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// Pours batches of beverages over a fixed pool of outlets while sharing one
/// ingredient inventory.
#[derive(Clone)]
pub struct Dispenser {
    inventory: InventoryClient,
    reservations: ReservationClient,
    locks: Arc<LockRegistry>,
    outlets: NonZeroUsize,
    queue_capacity: usize,
    retry: RetryPolicy,
}

impl Dispenser {
    /// # Errors
    /// Returns `InvalidOutletCount` when the config asks for zero outlets.
    pub fn new(config: DispenserConfig, inventory: InventoryClient, reservations: ReservationClient) -> Result<Self> {
        let outlets = NonZeroUsize::new(config.outlets).ok_or(DispenserError::InvalidOutletCount(config.outlets))?;
        Ok(Self {
            inventory,
            reservations,
            locks: Arc::new(LockRegistry::new()),
            outlets,
            queue_capacity: config.queue_capacity.max(1),
            retry: config.retry,
        })
    }

    pub fn outlets(&self) -> usize {
        self.outlets.get()
    }

    /// Pours every beverage and returns a closed channel holding exactly one
    /// outcome per beverage, in completion order.
    ///
    /// Returns once all outlets have drained the batch. A failed beverage never
    /// stops the others.
    #[instrument(fields(beverages = beverages.len(), outlets = self.outlets.get()), skip(self, beverages))]
    pub async fn pour_drinks(&self, beverages: Vec<Beverage>) -> mpsc::Receiver<PourOutcome> {
        info!("Pouring batch");
        let (queue_tx, queue_rx) = mpsc::channel(self.queue_capacity);
        let queue_rx = Arc::new(AsyncMutex::new(queue_rx));
        let (results_tx, results_rx) = mpsc::channel(beverages.len().max(1));

        let mut outlets = JoinSet::new();
        for outlet in 0..self.outlets.get() {
            let span = info_span!("outlet", outlet);
            outlets.spawn(
                self.clone()
                    .run_outlet(Arc::clone(&queue_rx), results_tx.clone())
                    .instrument(span),
            );
        }
        drop(results_tx);

        for beverage in beverages {
            if queue_tx.send(beverage).await.is_err() {
                error!("Every outlet stopped before the batch was queued");
                break;
            }
        }
        drop(queue_tx);

        while let Some(joined) = outlets.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "Outlet task failed");
            }
        }
        info!("Batch finished");
        results_rx
    }

    async fn run_outlet(self, queue: Arc<AsyncMutex<mpsc::Receiver<Beverage>>>, results: mpsc::Sender<PourOutcome>) {
        debug!("Outlet ready");
        loop {
            let next = queue.lock().await.recv().await;
            let Some(beverage) = next else { break };
            let outcome = self.pour_drink(beverage).await;
            if results.send(outcome).await.is_err() {
                warn!("Outcome receiver dropped");
                break;
            }
        }
        debug!("Outlet drained");
    }

    /// Pours a single beverage, retrying while its ingredients are contended.
    #[instrument(fields(beverage = %beverage.id), skip(self, beverage))]
    pub async fn pour_drink(&self, beverage: Beverage) -> PourOutcome {
        let target = &beverage;
        let result = retry_if(&self.retry, move || self.attempt_pour(target)).await;
        match result {
            Ok(()) => {
                info!("Beverage prepared");
                PourOutcome::prepared(beverage)
            }
            Err(e) => {
                info!(reason = %e, "Beverage not prepared");
                PourOutcome::not_prepared(beverage, e.to_string())
            }
        }
    }

    /// One pass of reserve, commit and release for `beverage`.
    async fn attempt_pour(&self, beverage: &Beverage) -> Result<()> {
        // Zero-quantity requirements ask for nothing and are skipped outright.
        let requirements: Vec<&Ingredient> = beverage.ingredients.iter().filter(|i| i.quantity > 0).collect();

        let mut reserved = 0;
        let mut result = Ok(());
        for requirement in &requirements {
            if let Err(e) = self.reserve_if_possible(requirement).await {
                result = Err(e);
                break;
            }
            reserved += 1;
        }

        if result.is_ok() {
            for requirement in &requirements {
                if let Err(e) = self.consume(requirement).await {
                    error!(ingredient = %requirement.id, error = %e, "Consume failed after reservation");
                    result = Err(e);
                    break;
                }
            }
        }

        if let Err(e) = self.release_reservations(&requirements[..reserved]).await {
            error!(error = %e, "Releasing reservations failed");
            result = Err(e);
        }
        result
    }

    #[instrument(fields(ingredient = %requirement.id, quantity = requirement.quantity), skip(self, requirement))]
    async fn reserve_if_possible(&self, requirement: &Ingredient) -> Result<()> {
        let _guard = self.locks.acquire(&requirement.id).await;

        let available = self.inventory.quantity(requirement.id.clone()).await?;
        let reserved = self.reservations.reserved(requirement.id.clone()).await?;

        if available.saturating_sub(reserved) >= requirement.quantity {
            return self.reservations.create(requirement.id.clone(), requirement.quantity).await;
        }
        if available >= requirement.quantity {
            debug!(available, reserved, "Stock claimed by beverages in flight");
            return Err(DispenserError::temporarily_unavailable(requirement.id.clone()));
        }
        debug!(available, reserved, "Stock insufficient");
        Err(DispenserError::insufficient(requirement.id.clone()))
    }

    async fn consume(&self, requirement: &Ingredient) -> Result<()> {
        let _guard = self.locks.acquire(&requirement.id).await;
        self.inventory
            .consume(requirement.id.clone(), requirement.quantity)
            .await
            .map(|_| ())
    }

    async fn release_reservations(&self, requirements: &[&Ingredient]) -> Result<()> {
        for requirement in requirements {
            let _guard = self.locks.acquire(&requirement.id).await;
            self.reservations
                .delete(requirement.id.clone(), requirement.quantity)
                .await?;
        }
        Ok(())
    }

    /// Adds stock under the ingredient's lock and returns the new quantity.
    #[instrument(fields(ingredient = %ingredient.id, quantity = ingredient.quantity), skip(self, ingredient))]
    pub async fn refill(&self, ingredient: Ingredient) -> Result<u32> {
        let _guard = self.locks.acquire(&ingredient.id).await;
        let quantity = self.inventory.refill(ingredient.id, ingredient.quantity).await?;
        info!(new_quantity = quantity, "Ingredient refilled");
        Ok(quantity)
    }

    /// Current stock; `ResourceNotAvailable` for ingredients never touched.
    pub async fn quantity(&self, ingredient: &str) -> Result<u32> {
        let _guard = self.locks.acquire(ingredient).await;
        self.inventory.quantity(ingredient.to_string()).await
    }

    /// Quantity currently claimed by beverages in flight.
    pub async fn reserved(&self, ingredient: &str) -> Result<u32> {
        let _guard = self.locks.acquire(ingredient).await;
        self.reservations.reserved(ingredient.to_string()).await
    }

    pub fn inventory(&self) -> &InventoryClient {
        &self.inventory
    }
}
