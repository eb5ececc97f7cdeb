//! Opt-in retry layer for vessel allocation.
//!
//! Not installed unless `vessel.retry.max_retries > 0`. Retries only
//! transient failures; a "no vessel" answer is returned at once.

use std::time::Duration;

use async_trait::async_trait;
use backon::Retryable;
use tracing::warn;

use super::{AllocationError, Result, VesselAllocator};
use crate::config::AllocationRetryConfig;
use crate::proto::vessel::{Specification, Vessel};
use crate::utils::retry::allocation_backoff;

/// Wraps an allocator and retries transient failures with backoff.
pub struct RetryingVesselAllocator<A> {
    inner: A,
    config: AllocationRetryConfig,
}

impl<A: VesselAllocator> RetryingVesselAllocator<A> {
    pub fn new(inner: A, config: AllocationRetryConfig) -> Self {
        Self { inner, config }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

#[async_trait]
impl<A: VesselAllocator> VesselAllocator for RetryingVesselAllocator<A> {
    async fn find_available(&self, spec: Specification) -> Result<Vessel> {
        (|| async { self.inner.find_available(spec.clone()).await })
            .retry(allocation_backoff(&self.config))
            .when(AllocationError::is_transient)
            .notify(|err: &AllocationError, dur: Duration| {
                warn!(error = %err, delay = ?dur, "Vessel lookup failed, retrying");
            })
            .await
    }
}
