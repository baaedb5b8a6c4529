use super::Ingredient;

/// A request to pour one beverage.
///
/// Requirements are processed in the order given here, both when reserving
/// and when consuming stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beverage {
    pub id: String,
    pub ingredients: Vec<Ingredient>,
}

impl Beverage {
    pub fn new(id: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            id: id.into(),
            ingredients,
        }
    }

    /// Builds a beverage from `(ingredient, quantity)` pairs.
    pub fn from_pairs<I, S>(id: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let ingredients = pairs
            .into_iter()
            .map(|(ingredient, quantity)| Ingredient::new(ingredient, quantity))
            .collect();
        Self::new(id, ingredients)
    }
}
