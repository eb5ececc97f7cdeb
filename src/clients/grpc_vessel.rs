//! gRPC client for the vessel service.

use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Request;
use tracing::debug;

use super::{AllocationError, Result, VesselAllocator};
use crate::proto::vessel::{vessel_service_client::VesselServiceClient, Specification, Vessel};
use crate::transport::connect_to_address;

/// Allocator backed by the remote vessel service.
///
/// Each call clones the underlying tonic client, so concurrent requests
/// share one channel. When a timeout is set and expires, the call future is
/// dropped, which cancels the in-flight RPC.
#[derive(Clone)]
pub struct GrpcVesselClient {
    client: VesselServiceClient<Channel>,
    timeout: Option<Duration>,
}

impl GrpcVesselClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: VesselServiceClient::new(channel),
            timeout: None,
        }
    }

    /// Connect to the vessel service at `address` (TCP or UDS).
    pub async fn connect(address: &str) -> Result<Self> {
        let channel = connect_to_address(address)
            .await
            .map_err(|e| AllocationError::Unavailable(format!("{}: {}", address, e)))?;
        Ok(Self::new(channel))
    }

    /// Set the per-call deadline. None waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl VesselAllocator for GrpcVesselClient {
    async fn find_available(&self, spec: Specification) -> Result<Vessel> {
        let (capacity, max_weight) = (spec.capacity, spec.max_weight);
        debug!(capacity, max_weight, "Requesting vessel");

        let mut client = self.client.clone();
        let call = client.find_available(Request::new(spec));
        let response = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| AllocationError::Timeout(limit))??,
            None => call.await?,
        };

        response
            .into_inner()
            .vessel
            .ok_or(AllocationError::NoVesselAvailable {
                capacity,
                max_weight,
            })
    }
}
