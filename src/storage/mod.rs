//! Storage implementations.

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageConfig, StorageType};

pub mod memory;
pub mod mock;

pub use crate::interfaces::consignment_store::{ConsignmentStore, Result, StorageError};
pub use memory::InMemoryConsignmentStore;
pub use mock::MockConsignmentStore;

/// Initialize storage based on configuration.
pub fn init_storage(config: &StorageConfig) -> Arc<dyn ConsignmentStore> {
    match config.storage_type {
        StorageType::Memory => {
            info!(
                storage = "memory",
                "Storage initialized (volatile, not persisted across restarts)"
            );
            Arc::new(InMemoryConsignmentStore::new())
        }
    }
}
