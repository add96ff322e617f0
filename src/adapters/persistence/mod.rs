//! Persistence Adapters - Local Key-Value Storage
//!
//! Implements the `LocalStore` port with atomic per-key JSON files
//! and with a process-local map. `open_store` picks one from config.

pub mod file_store;
pub mod memory_store;

use std::sync::Arc;

use tracing::info;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use crate::config::{StorageConfig, StoreBackend};
use crate::ports::local_store::{LocalStore, StoreError};

/// Build the store selected by `config.backend`.
pub async fn open_store(config: &StorageConfig) -> Result<Arc<dyn LocalStore>, StoreError> {
    match config.backend {
        StoreBackend::File => Ok(Arc::new(FileStore::new(&config.data_dir).await?)),
        StoreBackend::Memory => {
            info!("Using in-memory store, favorites will not survive this process");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
