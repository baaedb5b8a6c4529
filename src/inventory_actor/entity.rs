use crate::actor_framework::Entity;
use crate::error::DispenserError;
use super::StockAction;

/// Current available quantity of one ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientStock {
    pub id: String,
    pub quantity: u32,
}

impl Entity for IngredientStock {
    type Id = String;
    type Action = StockAction;
    type ActionResult = u32;
    type Error = DispenserError;

    fn id(&self) -> &String {
        &self.id
    }

    fn untouched(id: String) -> Self {
        Self { id, quantity: 0 }
    }

    /// Applies a consume or refill.
    ///
    /// # Errors
    /// `Consume` fails without touching the quantity when it would go negative.
    fn handle_action(&mut self, action: StockAction) -> Result<u32, DispenserError> {
        match action {
            StockAction::Consume(amount) => {
                if self.quantity < amount {
                    return Err(DispenserError::not_available(self.id.clone()));
                }
                self.quantity -= amount;
            }
            StockAction::Refill(amount) => {
                self.quantity = self.quantity.saturating_add(amount);
            }
        }
        Ok(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stock(quantity: u32) -> IngredientStock {
        IngredientStock { id: "hot_water".into(), quantity }
    }

    #[test]
    fn refill_adds_to_untouched_stock() {
        let mut item = IngredientStock::untouched("hot_water".into());
        assert_eq!(item.handle_action(StockAction::Refill(5)), Ok(5));
        assert_eq!(item.handle_action(StockAction::Refill(5)), Ok(10));
    }

    #[test]
    fn consume_down_to_zero() {
        let mut item = stock(5);
        assert_eq!(item.handle_action(StockAction::Consume(5)), Ok(0));
        assert_eq!(
            item.handle_action(StockAction::Consume(1)),
            Err(DispenserError::not_available("hot_water"))
        );
        assert_eq!(item.quantity, 0);
    }

    fn action() -> impl Strategy<Value = StockAction> {
        prop_oneof![
            (0u32..50).prop_map(StockAction::Consume),
            (0u32..50).prop_map(StockAction::Refill),
        ]
    }

    proptest! {
        #[test]
        fn prop_consume_never_drives_stock_negative(
            start in 0u32..100,
            actions in proptest::collection::vec(action(), 0..40),
        ) {
            let mut item = stock(start);
            for action in actions {
                let before = item.quantity;
                match (action, item.handle_action(action)) {
                    (StockAction::Consume(n), Ok(left)) => {
                        prop_assert!(n <= before);
                        prop_assert_eq!(left, before - n);
                    }
                    (StockAction::Consume(n), Err(_)) => {
                        prop_assert!(n > before);
                        prop_assert_eq!(item.quantity, before);
                    }
                    (StockAction::Refill(n), result) => {
                        prop_assert_eq!(result, Ok(before + n));
                    }
                }
            }
        }
    }
}
