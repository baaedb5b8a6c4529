//! # Mock Framework
//!
//! Utilities for testing the engine against store actors that misbehave.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_action`] to assert behavior
//! and answer each request with whatever the test needs.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// Requests sent through the client arrive on `receiver` instead of a real
/// `ResourceActor`, so tests can simulate failures the real stores never
/// produce on their own (a consume failing after a successful reservation,
/// a ledger that cannot release).
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InventoryClient;
    use crate::inventory_actor::{IngredientStock, StockAction};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<IngredientStock>(10);
        let inventory = InventoryClient::new(client);

        let refill_task = tokio::spawn(async move { inventory.refill("hot_water".into(), 5).await });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, "hot_water");
        assert_eq!(action, StockAction::Refill(5));
        responder.send(Ok(5)).unwrap();

        let result = refill_task.await.unwrap();
        assert_eq!(result, Ok(5));
    }
}
