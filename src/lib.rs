//! # Cart Store
//!
//! Client-side shopping cart for the storefront: line items keyed by product
//! id and color variant, derived totals, and a snapshot persisted to
//! browser-style local storage after every change.
//!
//! ## Layers
//!
//! - **Domain** - [`CartLineItem`], [`LineKey`] and the [`Cart`] container that
//!   enforces one line per identity
//! - **Storage** - the [`LocalStorage`] trait with [`MemoryStorage`] and
//!   [`FileStorage`] backends
//! - **Store** - [`CartStore`] ties a cart to its snapshot key and swallows
//!   persistence failures
//! - **Service** - [`CartService`] owns the store and handles one request at a
//!   time; [`CartClient`] is the clonable handle callers hold
//! - **System** - [`CartSystem`] starts and stops the service
//!
//! ## Example Usage
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use cart_store::{CartLineItem, CartSystem, MemoryStorage, DEFAULT_CART_KEY};
//! # use rust_decimal::Decimal;
//! # async fn demo() -> Result<(), cart_store::CartError> {
//! let system = CartSystem::start(Arc::new(MemoryStorage::new()), DEFAULT_CART_KEY, 32);
//!
//! let necklace = CartLineItem::new("P1", "Necklace", Decimal::new(4999, 2), "/n.jpg", 1);
//! system.cart_client.add_to_cart(necklace).await?;
//! assert_eq!(system.cart_client.total_items().await?, 1);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod messages;
pub mod storage;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, CartSystem};
pub use cart_actor::{CartService, CartSnapshots, CartStore, DEFAULT_CART_KEY};
pub use clients::CartClient;
pub use config::CartConfig;
pub use domain::{Cart, CartLineItem, CartSummary, LineKey};
pub use error::CartError;
pub use storage::{FileStorage, LocalStorage, MemoryStorage, StorageError};
