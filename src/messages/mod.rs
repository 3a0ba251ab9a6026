use tokio::sync::oneshot;

use crate::domain::{CartLineItem, CartSummary};
use crate::error::CartError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests handled by the cart service. Each variant carries its parameters
/// and a oneshot channel for the response.
#[derive(Debug)]
pub enum CartRequest {
    AddToCart {
        item: CartLineItem,
        respond_to: ServiceResponse<(), CartError>,
    },
    RemoveFromCart {
        id: String,
        color: Option<String>,
        respond_to: ServiceResponse<(), CartError>,
    },
    UpdateQuantity {
        id: String,
        quantity: u32,
        color: Option<String>,
        respond_to: ServiceResponse<(), CartError>,
    },
    ClearCart {
        respond_to: ServiceResponse<(), CartError>,
    },
    Items {
        respond_to: ServiceResponse<Vec<CartLineItem>, CartError>,
    },
    TotalItems {
        respond_to: ServiceResponse<u64, CartError>,
    },
    Summary {
        respond_to: ServiceResponse<CartSummary, CartError>,
    },
    Reload {
        respond_to: ServiceResponse<(), CartError>,
    },
    Shutdown,
    #[cfg(test)]
    LineCount {
        respond_to: ServiceResponse<usize, CartError>,
    },
}
