/// Mutations applied to an ingredient's stock.
///
/// Both variants reply with the quantity left after the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// Takes the given amount out of stock.
    ///
    /// # Errors
    /// Fails with `ResourceNotAvailable` if less than the amount is in stock.
    Consume(u32),
    /// Adds the given amount to stock.
    Refill(u32),
}
