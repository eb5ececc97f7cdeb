//! gRPC service implementations.

pub mod consignment;

pub use consignment::{allocation_spec, ConsignmentService, ServiceError};
