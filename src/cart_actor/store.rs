use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use super::snapshot::CartSnapshots;
use crate::domain::{Cart, CartLineItem, CartSummary};
use crate::error::CartError;
use crate::storage::LocalStorage;

/// The cart plus its persistence.
///
/// Every mutation updates memory first and then writes the whole snapshot.
/// A failed write is logged and otherwise ignored: the cart keeps working for
/// the rest of the session even when it cannot be saved.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    snapshots: CartSnapshots,
}

impl CartStore {
    /// Restores the cart from `storage` under `key`, or starts empty.
    pub fn initialize(storage: Arc<dyn LocalStorage>, key: impl Into<String>) -> Self {
        let snapshots = CartSnapshots::new(storage, key);
        let cart = snapshots.load();
        info!(key = %snapshots.key(), lines = cart.len(), "Cart initialized");
        Self { cart, snapshots }
    }

    pub fn add_to_cart(&mut self, item: CartLineItem) -> Result<(), CartError> {
        self.cart.add(item)?;
        self.persist();
        Ok(())
    }

    pub fn remove_from_cart(&mut self, id: &str, color: Option<&str>) {
        self.cart.remove(id, color);
        self.persist();
    }

    pub fn update_quantity(&mut self, id: &str, quantity: u32, color: Option<&str>) {
        if self.cart.update_quantity(id, quantity, color) {
            self.persist();
        }
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Replaces the in-memory cart with whatever storage currently holds.
    ///
    /// Another process sharing the storage may have written since we loaded.
    pub fn reload(&mut self) {
        self.cart = self.snapshots.load();
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Owned copy of the line items.
    pub fn snapshot(&self) -> Vec<CartLineItem> {
        self.cart.items().to_vec()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from(&self.cart)
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn subtotal(&self) -> Decimal {
        self.cart.subtotal()
    }

    fn persist(&self) {
        if let Err(e) = self.snapshots.save(&self.cart) {
            warn!(key = %self.snapshots.key(), error = %e, "Failed to persist cart snapshot");
        }
    }
}
