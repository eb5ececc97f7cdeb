//! Consignment service (ShippingService).
//!
//! Create path: derive a vessel specification from the consignment, ask the
//! vessel service for a match, bind the returned vessel id and persist. Any
//! failure ends the request with nothing stored. List path: read the store.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{info, warn};

use crate::interfaces::{AllocationError, ConsignmentStore, StorageError, VesselAllocator};
use crate::proto::consignment::{
    self as pb, shipping_service_server::ShippingService, Consignment, GetRequest,
};
use crate::proto::vessel::Specification;

/// Errors surfaced by the consignment service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Vessel allocation failed: {0}")]
    Allocation(#[from] AllocationError),

    #[error("Failed to persist consignment: {0}")]
    Persistence(#[from] StorageError),
}

impl From<ServiceError> for Status {
    fn from(err: ServiceError) -> Self {
        match err {
            // The vessel service's own status goes back to the caller untouched.
            ServiceError::Allocation(AllocationError::Grpc(status)) => *status,
            ServiceError::Allocation(e @ AllocationError::Unavailable(_)) => {
                Status::unavailable(e.to_string())
            }
            ServiceError::Allocation(e @ AllocationError::NoVesselAvailable { .. }) => {
                Status::not_found(e.to_string())
            }
            ServiceError::Allocation(e @ AllocationError::Timeout(_)) => {
                Status::deadline_exceeded(e.to_string())
            }
            ServiceError::Persistence(e @ StorageError::Unavailable(_)) => {
                Status::unavailable(e.to_string())
            }
            ServiceError::Persistence(e @ StorageError::Rejected(_)) => {
                Status::internal(e.to_string())
            }
        }
    }
}

/// Vessel specification for a consignment.
///
/// Weight is passed through unvalidated; capacity is the container count,
/// saturating at `i32::MAX`.
pub fn allocation_spec(consignment: &Consignment) -> Specification {
    Specification {
        capacity: i32::try_from(consignment.containers.len()).unwrap_or(i32::MAX),
        max_weight: consignment.weight,
    }
}

/// Consignment service.
///
/// Owns no state of its own: the store and the allocator are injected, so a
/// durable store or a different vessel client can be swapped in.
pub struct ConsignmentService {
    store: Arc<dyn ConsignmentStore>,
    vessels: Arc<dyn VesselAllocator>,
}

impl ConsignmentService {
    pub fn new(store: Arc<dyn ConsignmentStore>, vessels: Arc<dyn VesselAllocator>) -> Self {
        Self { store, vessels }
    }

    /// Allocate a vessel for `consignment` and persist it.
    ///
    /// Any incoming `vessel_id` is overwritten. Nothing is stored unless
    /// allocation succeeds with a non-empty vessel id.
    pub async fn create(&self, mut consignment: Consignment) -> Result<pb::Response, ServiceError> {
        let spec = allocation_spec(&consignment);
        let (capacity, max_weight) = (spec.capacity, spec.max_weight);

        let vessel = self.vessels.find_available(spec).await.map_err(|e| {
            warn!(
                consignment.id = %consignment.id,
                capacity,
                max_weight,
                error = %e,
                "Vessel allocation failed"
            );
            e
        })?;

        if vessel.id.is_empty() {
            warn!(
                consignment.id = %consignment.id,
                vessel.name = %vessel.name,
                "Vessel service returned a vessel without an id"
            );
            return Err(AllocationError::NoVesselAvailable {
                capacity,
                max_weight,
            }
            .into());
        }

        info!(
            consignment.id = %consignment.id,
            vessel.id = %vessel.id,
            vessel.name = %vessel.name,
            "Found vessel"
        );

        consignment.vessel_id = vessel.id;

        let consignment = self.store.create(consignment).await.map_err(|e| {
            warn!(error = %e, "Consignment not persisted");
            e
        })?;

        Ok(pb::Response {
            created: true,
            consignment: Some(consignment),
            consignments: vec![],
        })
    }

    /// Every stored consignment in creation order.
    pub async fn list(&self) -> Result<pb::Response, ServiceError> {
        let consignments = self.store.get_all().await?;
        Ok(pb::Response {
            created: false,
            consignment: None,
            consignments,
        })
    }
}

#[tonic::async_trait]
impl ShippingService for ConsignmentService {
    async fn create_consignment(
        &self,
        request: Request<Consignment>,
    ) -> Result<Response<pb::Response>, Status> {
        let response = self.create(request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn get_consignments(
        &self,
        _request: Request<GetRequest>,
    ) -> Result<Response<pb::Response>, Status> {
        let response = self.list().await?;
        Ok(Response::new(response))
    }
}
