//! In-memory consignment store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{ConsignmentStore, Result};
use crate::proto::consignment::Consignment;

/// Volatile, append-only consignment store.
///
/// Appends take the write lock and reads clone under the read lock, so a
/// reader sees either all or none of any concurrent append.
#[derive(Debug, Default)]
pub struct InMemoryConsignmentStore {
    consignments: RwLock<Vec<Consignment>>,
}

impl InMemoryConsignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.consignments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.consignments.read().await.is_empty()
    }
}

#[async_trait]
impl ConsignmentStore for InMemoryConsignmentStore {
    async fn create(&self, consignment: Consignment) -> Result<Consignment> {
        let mut consignments = self.consignments.write().await;
        consignments.push(consignment.clone());
        debug!(
            consignment.id = %consignment.id,
            vessel.id = %consignment.vessel_id,
            stored = consignments.len(),
            "Consignment stored"
        );
        Ok(consignment)
    }

    async fn get_all(&self) -> Result<Vec<Consignment>> {
        Ok(self.consignments.read().await.clone())
    }
}
