use std::collections::BTreeMap;
use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::error::{DispenserError, Result};
use crate::inventory_actor::{IngredientStock, StockAction};

/// Client for the inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<IngredientStock>,
}

impl_basic_client!(InventoryClient, IngredientStock, stock, stocks);

impl InventoryClient {
    /// Takes `quantity` out of stock and returns what is left.
    #[instrument(skip(self))]
    pub async fn consume(&self, ingredient: String, quantity: u32) -> Result<u32> {
        debug!("Sending request");
        self.inner.perform_action(ingredient, StockAction::Consume(quantity)).await
    }

    /// Adds `quantity` to stock and returns the new level.
    #[instrument(skip(self))]
    pub async fn refill(&self, ingredient: String, quantity: u32) -> Result<u32> {
        debug!("Sending request");
        self.inner.perform_action(ingredient, StockAction::Refill(quantity)).await
    }

    /// Current stock, failing for ingredients that were never touched.
    #[instrument(skip(self))]
    pub async fn quantity(&self, ingredient: String) -> Result<u32> {
        match self.get_stock(ingredient.clone()).await? {
            Some(stock) => Ok(stock.quantity),
            None => Err(DispenserError::not_available(ingredient)),
        }
    }

    /// Snapshot of every ingredient the inventory knows about.
    pub async fn stock_levels(&self) -> Result<BTreeMap<String, u32>> {
        let stocks = self.list_stocks().await?;
        Ok(stocks.into_iter().map(|s| (s.id, s.quantity)).collect())
    }
}
