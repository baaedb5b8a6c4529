pub mod ingredient;
pub mod beverage;
pub mod outcome;

pub use ingredient::*;
pub use beverage::*;
pub use outcome::*;
