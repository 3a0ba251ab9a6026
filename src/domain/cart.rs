use rust_decimal::Decimal;

use super::line_item::{normalize_color, CartLineItem};
use crate::error::CartError;

/// Ordered collection of line items with no two entries sharing a [`LineKey`].
///
/// Insertion order is kept for display only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from untrusted items, such as a restored snapshot.
    ///
    /// Entries sharing an identity are merged and zero-quantity entries are
    /// dropped, so the result always upholds the cart invariants.
    pub fn from_items(items: impl IntoIterator<Item = CartLineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            cart.merge(item);
        }
        cart
    }

    /// Adds an item, accumulating quantity onto an existing entry with the
    /// same identity.
    pub fn add(&mut self, item: CartLineItem) -> Result<(), CartError> {
        validate(&item)?;
        self.merge(item);
        Ok(())
    }

    /// Removes the entry with the given identity. Returns whether one existed.
    pub fn remove(&mut self, id: &str, color: Option<&str>) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.matches(id, color));
        self.items.len() != before
    }

    /// Sets the quantity of an existing entry. Quantities below one are
    /// ignored; use [`Cart::remove`] to drop an entry.
    pub fn update_quantity(&mut self, id: &str, quantity: u32, color: Option<&str>) -> bool {
        if quantity < 1 {
            return false;
        }
        match self.items.iter_mut().find(|item| item.matches(id, color)) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all entries.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price * quantity` across all entries, saturating at
    /// [`Decimal::MAX`].
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(CartLineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    fn merge(&mut self, mut item: CartLineItem) {
        item.color = normalize_color(item.color.take());
        let existing = self
            .items
            .iter_mut()
            .find(|existing| existing.matches(&item.id, item.color.as_deref()));
        match existing {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => self.items.push(item),
        }
    }
}

/// Consistent read of the cart and its derived totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSummary {
    pub items: Vec<CartLineItem>,
    pub total_items: u64,
    pub subtotal: Decimal,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items.clone(),
            total_items: cart.total_items(),
            subtotal: cart.subtotal(),
        }
    }
}

fn validate(item: &CartLineItem) -> Result<(), CartError> {
    if item.id.trim().is_empty() {
        return Err(CartError::MissingId);
    }
    if item.quantity == 0 {
        return Err(CartError::InvalidQuantity {
            id: item.id.clone(),
            quantity: item.quantity,
        });
    }
    if item.price < Decimal::ZERO {
        return Err(CartError::InvalidPrice {
            id: item.id.clone(),
            price: item.price,
        });
    }
    Ok(())
}
