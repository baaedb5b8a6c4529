/// A named consumable and an amount of it.
///
/// Used both for stock levels and for a beverage's per-ingredient requirement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ingredient {
    pub id: String,
    pub quantity: u32,
}

impl Ingredient {
    pub fn new(id: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}
