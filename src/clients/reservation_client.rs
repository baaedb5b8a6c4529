use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::error::Result;
use crate::reservation_actor::{Reservation, ReservationAction};

/// Client for the reservation ledger actor.
#[derive(Clone)]
pub struct ReservationClient {
    inner: ResourceClient<Reservation>,
}

impl_basic_client!(ReservationClient, Reservation, reservation, reservations);

impl ReservationClient {
    #[instrument(skip(self))]
    pub async fn create(&self, ingredient: String, quantity: u32) -> Result<()> {
        debug!("Sending request");
        self.inner
            .perform_action(ingredient, ReservationAction::Reserve(quantity))
            .await
            .map(|_| ())
    }

    /// Claimed quantity; zero for ingredients nobody reserved.
    #[instrument(skip(self))]
    pub async fn reserved(&self, ingredient: String) -> Result<u32> {
        let claim = self.get_reservation(ingredient).await?;
        Ok(claim.map_or(0, |c| c.reserved))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, ingredient: String, quantity: u32) -> Result<()> {
        debug!("Sending request");
        self.inner
            .perform_action(ingredient, ReservationAction::Release(quantity))
            .await
            .map(|_| ())
    }
}
