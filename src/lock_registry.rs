//! One async mutex per ingredient, created on first use.
//!
//! The registry map sits behind a plain mutex held only for the
//! lookup-or-insert. The per-ingredient locks it hands out are awaited by
//! callers independently, so beverages touching disjoint ingredients never
//! contend. Locks are never removed; the ingredient catalogue bounds the map.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::trace;

pub type IngredientLock = Arc<AsyncMutex<()>>;

#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: Mutex<HashMap<String, IngredientLock>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock for `ingredient`, creating it on first request.
    pub fn get_or_create(&self, ingredient: &str) -> IngredientLock {
        // Nothing inside the critical section can panic, so a poisoned map is still consistent.
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(lock) = locks.get(ingredient) {
            return Arc::clone(lock);
        }
        trace!(ingredient, "Creating ingredient lock");
        let lock = IngredientLock::default();
        locks.insert(ingredient.to_string(), Arc::clone(&lock));
        lock
    }

    /// Waits for exclusive access to `ingredient`. Released when the guard drops.
    pub async fn acquire(&self, ingredient: &str) -> OwnedMutexGuard<()> {
        self.get_or_create(ingredient).lock_owned().await
    }

    pub fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
