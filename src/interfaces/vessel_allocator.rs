//! Vessel allocation interface.

use std::time::Duration;

use async_trait::async_trait;
use tonic::Code;

use crate::proto::vessel::{Specification, Vessel};

/// Result type for allocation operations.
pub type Result<T> = std::result::Result<T, AllocationError>;

/// Errors that can occur while looking up a vessel.
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    #[error("Vessel service unavailable: {0}")]
    Unavailable(String),

    #[error("No vessel available: capacity={capacity}, max_weight={max_weight}")]
    NoVesselAvailable { capacity: i32, max_weight: i32 },

    #[error("Vessel lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("gRPC error: {0}")]
    Grpc(Box<tonic::Status>),
}

impl From<tonic::Status> for AllocationError {
    fn from(status: tonic::Status) -> Self {
        AllocationError::Grpc(Box::new(status))
    }
}

impl AllocationError {
    /// True when the vessel service could not be reached in time, as opposed
    /// to answering that nothing fits.
    pub fn is_transient(&self) -> bool {
        match self {
            AllocationError::Unavailable(_) | AllocationError::Timeout(_) => true,
            AllocationError::Grpc(status) => status.code() == Code::Unavailable,
            AllocationError::NoVesselAvailable { .. } => false,
        }
    }
}

/// Interface for the vessel service's `FindAvailable` capability.
///
/// Returns at most one vessel. Matching and tie-breaking belong to the
/// vessel service; callers never choose between candidates.
///
/// Implementations:
/// - `GrpcVesselClient`: remote vessel service over gRPC
/// - `RetryingVesselAllocator`: opt-in retry layer over another allocator
/// - `MockVesselAllocator`: scripted responses for tests
#[async_trait]
pub trait VesselAllocator: Send + Sync {
    /// Find one vessel able to carry `spec`.
    async fn find_available(&self, spec: Specification) -> Result<Vessel>;
}
