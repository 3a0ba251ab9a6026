use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{CartLineItem, CartSummary};
use crate::error::CartError;
use crate::messages::CartRequest;

/// Handle to the cart service. Cheap to clone; every clone talks to the same
/// cart.
#[derive(Debug, Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CartError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|e| CartError::ActorCommunication(e.to_string()))
    }
}

client_method!(CartClient => fn add_to_cart(item: CartLineItem) -> () as CartRequest::AddToCart);
client_method!(CartClient => fn remove_from_cart(id: String, color: Option<String>) -> () as CartRequest::RemoveFromCart);
client_method!(CartClient => fn update_quantity(id: String, quantity: u32, color: Option<String>) -> () as CartRequest::UpdateQuantity);
client_method!(CartClient => fn clear_cart() -> () as CartRequest::ClearCart);
client_method!(CartClient => fn items() -> Vec<CartLineItem> as CartRequest::Items);
client_method!(CartClient => fn total_items() -> u64 as CartRequest::TotalItems);
client_method!(CartClient => fn summary() -> CartSummary as CartRequest::Summary);
client_method!(CartClient => fn reload() -> () as CartRequest::Reload);

#[cfg(test)]
client_method!(CartClient => fn line_count() -> usize as CartRequest::LineCount);
