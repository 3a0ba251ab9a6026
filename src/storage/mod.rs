//! Browser-style durable key-value storage.
//!
//! [`LocalStorage`] mirrors the shape of a web `localStorage`: string keys,
//! string values, whole-value overwrite. The cart only ever touches one key.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::fmt::Debug;
use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage quota exceeded: requested {requested} bytes, quota {quota} bytes")]
    QuotaExceeded { requested: usize, quota: usize },
    #[error("Storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Synchronous key-value store scoped to one browsing profile.
///
/// All methods take `&self`; implementations use interior mutability.
pub trait LocalStorage: Send + Sync + Debug {
    /// Returns `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Succeeds even if the key did not exist.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
