//! Abstract interfaces for the consignment service.
//!
//! These traits define the contracts for:
//! - Consignment storage (append-only persistence)
//! - Vessel allocation (the external vessel service)

pub mod consignment_store;
pub mod vessel_allocator;

pub use consignment_store::{ConsignmentStore, StorageError};
pub use vessel_allocator::{AllocationError, VesselAllocator};
