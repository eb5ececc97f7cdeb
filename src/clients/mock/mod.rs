//! Mock vessel allocator for testing.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AllocationError, Result, VesselAllocator};
use crate::proto::vessel::{Specification, Vessel};

/// Scripted vessel allocator.
///
/// Answers from a queue of vessels first, then from the fallback vessel,
/// and reports `NoVesselAvailable` when neither is set. Every request is
/// recorded, including failed ones.
#[derive(Debug, Default)]
pub struct MockVesselAllocator {
    queued: RwLock<VecDeque<Vessel>>,
    fallback: RwLock<Option<Vessel>>,
    fail_on_find: RwLock<bool>,
    transient_failures: RwLock<u32>,
    requests: RwLock<Vec<Specification>>,
}

impl MockVesselAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocator that always returns the given vessel.
    pub fn with_vessel(id: &str, name: &str) -> Self {
        Self {
            fallback: RwLock::new(Some(vessel(id, name))),
            ..Self::default()
        }
    }

    pub async fn set_vessel(&self, vessel: Option<Vessel>) {
        *self.fallback.write().await = vessel;
    }

    /// Serve these vessels, one per request, before the fallback.
    pub async fn queue_vessels(&self, vessels: impl IntoIterator<Item = Vessel>) {
        self.queued.write().await.extend(vessels);
    }

    /// Fail every request as if the vessel service were unreachable.
    pub async fn set_fail_on_find(&self, fail: bool) {
        *self.fail_on_find.write().await = fail;
    }

    /// Fail the next `count` requests as unreachable, then recover.
    pub async fn fail_next(&self, count: u32) {
        *self.transient_failures.write().await = count;
    }

    pub async fn requests(&self) -> Vec<Specification> {
        self.requests.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

/// Build a vessel with the given identity and name.
pub fn vessel(id: &str, name: &str) -> Vessel {
    Vessel {
        id: id.to_string(),
        name: name.to_string(),
        capacity: 500,
        max_weight: 200_000,
        available: true,
        owner_id: String::new(),
    }
}

#[async_trait]
impl VesselAllocator for MockVesselAllocator {
    async fn find_available(&self, spec: Specification) -> Result<Vessel> {
        self.requests.write().await.push(spec.clone());

        if *self.fail_on_find.read().await {
            return Err(AllocationError::Unavailable(
                "Mock connection failure".to_string(),
            ));
        }

        {
            let mut remaining = self.transient_failures.write().await;
            if *remaining > 0 {
                *remaining -= 1;
                return Err(AllocationError::Unavailable(
                    "Mock transient failure".to_string(),
                ));
            }
        }

        if let Some(vessel) = self.queued.write().await.pop_front() {
            return Ok(vessel);
        }

        self.fallback
            .read()
            .await
            .clone()
            .ok_or(AllocationError::NoVesselAvailable {
                capacity: spec.capacity,
                max_weight: spec.max_weight,
            })
    }
}
