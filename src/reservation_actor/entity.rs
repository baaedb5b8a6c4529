use crate::actor_framework::Entity;
use crate::error::DispenserError;
use super::ReservationAction;

/// Quantity of one ingredient currently claimed by in-flight beverages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: String,
    pub reserved: u32,
}

impl Entity for Reservation {
    type Id = String;
    type Action = ReservationAction;
    type ActionResult = u32;
    type Error = DispenserError;

    fn id(&self) -> &String {
        &self.id
    }

    fn untouched(id: String) -> Self {
        Self { id, reserved: 0 }
    }

    fn handle_action(&mut self, action: ReservationAction) -> Result<u32, DispenserError> {
        match action {
            ReservationAction::Reserve(amount) => {
                self.reserved = self.reserved.saturating_add(amount);
            }
            ReservationAction::Release(amount) => {
                if amount > self.reserved {
                    return Err(DispenserError::insufficient(self.id.clone()));
                }
                self.reserved -= amount;
            }
        }
        Ok(self.reserved)
    }
}
