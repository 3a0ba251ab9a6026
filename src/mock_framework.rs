//! # Mock Framework
//!
//! Utilities for testing code that talks to the cart through a [`CartClient`]
//! without running a [`CartService`](crate::cart_actor::CartService).
//!
//! [`create_mock_client`] returns a client plus the receiving end of its
//! channel; the `expect_*` helpers pull the next request off that channel and
//! hand back its parameters and responder.

use tokio::sync::mpsc;

use crate::clients::CartClient;
use crate::domain::CartLineItem;
use crate::error::CartError;
use crate::messages::{CartRequest, ServiceResponse};

pub fn create_mock_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartClient::new(sender), receiver)
}

/// Next message must be an AddToCart request
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(CartLineItem, ServiceResponse<(), CartError>)> {
    match receiver.recv().await {
        Some(CartRequest::AddToCart { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Next message must be an UpdateQuantity request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(String, u32, Option<String>, ServiceResponse<(), CartError>)> {
    match receiver.recv().await {
        Some(CartRequest::UpdateQuantity {
            id,
            quantity,
            color,
            respond_to,
        }) => Some((id, quantity, color, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_client_add() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move {
            let item = CartLineItem::new("P1", "Necklace", Decimal::new(4999, 2), "/n.jpg", 1);
            client.add_to_cart(item).await
        });

        let (item, responder) = expect_add(&mut receiver).await.expect("Expected AddToCart request");
        assert_eq!(item.id, "P1");
        responder.send(Ok(())).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_mock_client_forwards_update_parameters() {
        let (client, mut receiver) = create_mock_client(10);

        let update_task = tokio::spawn(async move {
            client.update_quantity("P2".to_string(), 4, Some("red".to_string())).await
        });

        let (id, quantity, color, responder) =
            expect_update(&mut receiver).await.expect("Expected UpdateQuantity request");
        assert_eq!(id, "P2");
        assert_eq!(quantity, 4);
        assert_eq!(color.as_deref(), Some("red"));
        responder.send(Ok(())).unwrap();

        assert_eq!(update_task.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn dropped_responder_surfaces_as_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move {
            let item = CartLineItem::new("P1", "Necklace", Decimal::new(4999, 2), "/n.jpg", 1);
            client.add_to_cart(item).await
        });

        let (_item, responder) = expect_add(&mut receiver).await.expect("Expected AddToCart request");
        drop(responder);

        let result = add_task.await.unwrap();
        assert!(matches!(result, Err(CartError::ActorCommunication(_))));
    }
}
