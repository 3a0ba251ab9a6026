//! Cart configuration

use std::path::PathBuf;

use clap::Args;

use crate::cart_actor::DEFAULT_CART_KEY;

/// Storage and runtime settings for the cart system.
#[derive(Debug, Clone, Args)]
pub struct CartConfig {
    /// Directory holding persisted snapshots. Without it the cart lives in
    /// memory only.
    #[arg(long, env = "CART_STORAGE_DIR")]
    pub storage_dir: Option<PathBuf>,

    /// Storage key the cart snapshot is written under
    #[arg(long, env = "CART_STORAGE_KEY", default_value = DEFAULT_CART_KEY)]
    pub storage_key: String,

    /// Request channel capacity of the cart service
    #[arg(long, env = "CART_CHANNEL_BUFFER", default_value_t = 32)]
    pub buffer_size: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CART_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            storage_key: DEFAULT_CART_KEY.to_string(),
            buffer_size: 32,
            log_level: "info".to_string(),
        }
    }
}
