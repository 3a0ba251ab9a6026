use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use super::store::CartStore;
use crate::clients::CartClient;
use crate::domain::{CartLineItem, CartSummary};
use crate::error::CartError;
use crate::messages::{CartRequest, ServiceResponse};

/// Actor that owns the session's [`CartStore`].
///
/// Requests are handled one at a time, so each mutation runs to completion
/// before the next one starts. All handlers are sync: the cart lives in
/// memory and snapshot writes are small.
#[derive(Debug)]
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    store: CartStore,
}

impl CartService {
    pub fn new(buffer_size: usize, store: CartStore) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, store };
        let client = CartClient::new(sender);
        (service, client)
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddToCart { item, respond_to } => {
                    self.handle_add_to_cart(item, respond_to);
                }
                CartRequest::RemoveFromCart {
                    id,
                    color,
                    respond_to,
                } => {
                    self.handle_remove_from_cart(id, color, respond_to);
                }
                CartRequest::UpdateQuantity {
                    id,
                    quantity,
                    color,
                    respond_to,
                } => {
                    self.handle_update_quantity(id, quantity, color, respond_to);
                }
                CartRequest::ClearCart { respond_to } => {
                    self.handle_clear_cart(respond_to);
                }
                CartRequest::Items { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.snapshot()));
                }
                CartRequest::TotalItems { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.total_items()));
                }
                CartRequest::Summary { respond_to } => {
                    self.handle_summary(respond_to);
                }
                CartRequest::Reload { respond_to } => {
                    self.handle_reload(respond_to);
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
                #[cfg(test)]
                CartRequest::LineCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.cart().len()));
                }
            }
        }

        info!("CartService stopped");
    }

    #[instrument(
        fields(item_id = %item.id, color = ?item.color, quantity = item.quantity),
        skip(self, item, respond_to)
    )]
    fn handle_add_to_cart(&mut self, item: CartLineItem, respond_to: ServiceResponse<(), CartError>) {
        debug!("Processing add_to_cart request");

        let result = self.store.add_to_cart(item);
        match &result {
            Ok(()) => info!(total_items = self.store.total_items(), "Item added to cart"),
            Err(e) => info!(error = %e, "Rejected add_to_cart"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(item_id = %id, color = ?color), skip(self, id, color, respond_to))]
    fn handle_remove_from_cart(
        &mut self,
        id: String,
        color: Option<String>,
        respond_to: ServiceResponse<(), CartError>,
    ) {
        debug!("Processing remove_from_cart request");

        self.store.remove_from_cart(&id, color.as_deref());
        info!(total_items = self.store.total_items(), "Remove processed");

        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(item_id = %id, color = ?color), skip(self, id, color, respond_to))]
    fn handle_update_quantity(
        &mut self,
        id: String,
        quantity: u32,
        color: Option<String>,
        respond_to: ServiceResponse<(), CartError>,
    ) {
        debug!("Processing update_quantity request");

        self.store.update_quantity(&id, quantity, color.as_deref());
        info!(total_items = self.store.total_items(), "Update processed");

        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_clear_cart(&mut self, respond_to: ServiceResponse<(), CartError>) {
        debug!("Processing clear_cart request");

        self.store.clear_cart();
        info!("Cart cleared");

        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_summary(&self, respond_to: ServiceResponse<CartSummary, CartError>) {
        debug!("Processing summary request");

        let summary = self.store.summary();
        debug!(
            lines = summary.items.len(),
            total_items = summary.total_items,
            subtotal = %summary.subtotal,
            "Summary computed"
        );

        let _ = respond_to.send(Ok(summary));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_reload(&mut self, respond_to: ServiceResponse<(), CartError>) {
        debug!("Processing reload request");

        self.store.reload();
        info!(total_items = self.store.total_items(), "Cart reloaded from storage");

        let _ = respond_to.send(Ok(()));
    }
}
