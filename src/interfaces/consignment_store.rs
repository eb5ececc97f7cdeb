//! Consignment storage interface.

use async_trait::async_trait;

use crate::proto::consignment::Consignment;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
///
/// The in-memory store never produces these; they exist so a durable
/// backend can report failure without changing the service.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Consignment rejected by storage: {0}")]
    Rejected(String),
}

/// Interface for consignment persistence.
///
/// Stores are append-only: a record is never updated or removed once
/// created, and `get_all` returns records in insertion order. Concurrent
/// `create` calls must not lose records, and `get_all` must never observe
/// a partially applied append.
///
/// Implementations:
/// - `InMemoryConsignmentStore`: volatile, process-local
/// - `MockConsignmentStore`: failure injection for tests
#[async_trait]
pub trait ConsignmentStore: Send + Sync {
    /// Append a consignment and return the stored record unchanged.
    ///
    /// Precondition: `vessel_id` is already set. Stores do not check it and
    /// do not check identity uniqueness.
    async fn create(&self, consignment: Consignment) -> Result<Consignment>;

    /// Snapshot of every stored consignment, oldest first.
    ///
    /// Returns an empty vector when nothing has been created.
    async fn get_all(&self) -> Result<Vec<Consignment>>;
}
