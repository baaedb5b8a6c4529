#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationAction {
    /// Adds to the claimed amount. Never fails.
    Reserve(u32),
    /// Removes from the claimed amount.
    ///
    /// # Errors
    /// Fails with `InsufficientResource` if more is released than is claimed.
    Release(u32),
}
