use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced to cart callers.
///
/// Only `add_to_cart` validates its input; every other mutation degrades to a
/// no-op instead of failing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Line item is missing a product id")]
    MissingId,
    #[error("Invalid quantity for {id}: {quantity}")]
    InvalidQuantity { id: String, quantity: u32 },
    #[error("Invalid price for {id}: {price}")]
    InvalidPrice { id: String, price: Decimal },
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
