//! Mock storage implementation for testing.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ConsignmentStore, InMemoryConsignmentStore, Result, StorageError};
use crate::proto::consignment::Consignment;

/// Consignment store with switchable failures.
///
/// Delegates to an in-memory store when no failure is armed.
#[derive(Debug, Default)]
pub struct MockConsignmentStore {
    inner: InMemoryConsignmentStore,
    fail_on_create: RwLock<bool>,
    fail_on_get: RwLock<bool>,
    create_calls: RwLock<usize>,
}

impl MockConsignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_fail_on_create(&self, fail: bool) {
        *self.fail_on_create.write().await = fail;
    }

    pub async fn set_fail_on_get(&self, fail: bool) {
        *self.fail_on_get.write().await = fail;
    }

    /// Number of `create` calls, including failed ones.
    pub async fn create_calls(&self) -> usize {
        *self.create_calls.read().await
    }

    pub async fn stored_count(&self) -> usize {
        self.inner.len().await
    }
}

#[async_trait]
impl ConsignmentStore for MockConsignmentStore {
    async fn create(&self, consignment: Consignment) -> Result<Consignment> {
        *self.create_calls.write().await += 1;
        if *self.fail_on_create.read().await {
            return Err(StorageError::Unavailable(
                "Mock storage failure".to_string(),
            ));
        }
        self.inner.create(consignment).await
    }

    async fn get_all(&self) -> Result<Vec<Consignment>> {
        if *self.fail_on_get.read().await {
            return Err(StorageError::Unavailable(
                "Mock storage failure".to_string(),
            ));
        }
        self.inner.get_all().await
    }
}
