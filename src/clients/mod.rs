//! Vessel service clients.

pub mod grpc_vessel;
pub mod mock;
pub mod retrying;

pub use crate::interfaces::vessel_allocator::{AllocationError, Result, VesselAllocator};
pub use grpc_vessel::GrpcVesselClient;
pub use mock::MockVesselAllocator;
pub use retrying::RetryingVesselAllocator;
