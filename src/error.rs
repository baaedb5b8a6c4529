use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors raised while stocking ingredients or pouring beverages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispenserError {
    /// The ingredient was never stocked, or there is less of it than a consume asks for.
    #[error("resource not available, resource-id : {ingredient}")]
    ResourceNotAvailable { ingredient: String },
    /// Not enough of the ingredient exists to satisfy the request, even counting claimed stock.
    #[error("resource is insufficient, resource-id : {ingredient}")]
    InsufficientResource { ingredient: String },
    /// Enough stock exists but part of it is claimed by beverages still being poured.
    #[error("resource temporarily unavailable, resource-id : {ingredient}")]
    ResourceTemporarilyNotAvailable { ingredient: String },
    #[error("invalid outlet count: {0}")]
    InvalidOutletCount(usize),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl DispenserError {
    pub fn not_available(ingredient: impl Into<String>) -> Self {
        Self::ResourceNotAvailable {
            ingredient: ingredient.into(),
        }
    }

    pub fn insufficient(ingredient: impl Into<String>) -> Self {
        Self::InsufficientResource {
            ingredient: ingredient.into(),
        }
    }

    pub fn temporarily_unavailable(ingredient: impl Into<String>) -> Self {
        Self::ResourceTemporarilyNotAvailable {
            ingredient: ingredient.into(),
        }
    }

    /// Whether another attempt could succeed once in-flight beverages finish.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ResourceTemporarilyNotAvailable { .. })
    }
}

impl From<FrameworkError> for DispenserError {
    fn from(err: FrameworkError) -> Self {
        Self::ActorCommunication(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DispenserError>;
