//! The cart store and the actor that serializes access to it.

mod service;
mod snapshot;
mod store;

pub use service::*;
pub use snapshot::*;
pub use store::*;
