use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{Cart, CartLineItem};
use crate::storage::{LocalStorage, StorageError};

/// Storage key the storefront has always used for the cart.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Reads and writes the cart as a JSON array under a single storage key.
#[derive(Debug, Clone)]
pub struct CartSnapshots {
    storage: Arc<dyn LocalStorage>,
    key: String,
}

impl CartSnapshots {
    pub fn new(storage: Arc<dyn LocalStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the persisted cart. Absent, unreadable, or malformed snapshots
    /// all yield an empty cart; a malformed one is also deleted.
    pub fn load(&self) -> Cart {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No cart snapshot found");
                return Cart::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read cart snapshot");
                return Cart::new();
            }
        };

        match serde_json::from_str::<Vec<CartLineItem>>(&raw) {
            Ok(items) => {
                let cart = Cart::from_items(items);
                debug!(key = %self.key, lines = cart.len(), "Restored cart snapshot");
                cart
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding malformed cart snapshot");
                if let Err(e) = self.storage.remove(&self.key) {
                    warn!(key = %self.key, error = %e, "Failed to delete malformed cart snapshot");
                }
                Cart::new()
            }
        }
    }

    /// Overwrites the stored snapshot with the full cart.
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart.items())?;
        self.storage.set(&self.key, &raw)
    }
}
