//! Ingredient stock: the ground-truth quantity of every ingredient.

mod actions;
pub mod entity;

pub use actions::*;
pub use entity::*;
