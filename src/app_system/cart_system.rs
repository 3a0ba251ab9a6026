use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::cart_actor::{CartService, CartStore};
use crate::clients::CartClient;
use crate::config::CartConfig;
use crate::error::CartError;
use crate::storage::{FileStorage, LocalStorage, MemoryStorage, StorageError};

/// Owns the running cart service for one session.
///
/// Construct it once, hand out clones of `cart_client`, and call
/// [`CartSystem::shutdown`] when the session ends.
#[derive(Debug)]
pub struct CartSystem {
    pub cart_client: CartClient,
    handle: JoinHandle<()>,
}

impl CartSystem {
    /// Restores the cart from `storage` and starts the service.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(name = "cart_system", skip(storage))]
    pub fn start(storage: Arc<dyn LocalStorage>, key: &str, buffer_size: usize) -> Self {
        info!("Starting cart system");

        let store = CartStore::initialize(storage, key);
        let (service, cart_client) = CartService::new(buffer_size, store);
        let handle = tokio::spawn(service.run());

        info!("Cart system started");
        Self { cart_client, handle }
    }

    /// Builds storage from `config` and starts the service.
    pub fn from_config(config: &CartConfig) -> Result<Self, StorageError> {
        let storage: Arc<dyn LocalStorage> = match &config.storage_dir {
            Some(dir) => Arc::new(FileStorage::open(dir)?),
            None => Arc::new(MemoryStorage::new()),
        };
        Ok(Self::start(storage, &config.storage_key, config.buffer_size))
    }

    /// Stops the service after pending requests and waits for it to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), CartError> {
        info!("Shutting down cart system");

        let _ = self.cart_client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Cart service task failed");
            return Err(CartError::ActorCommunication(e.to_string()));
        }

        info!("Cart system shutdown complete");
        Ok(())
    }
}
