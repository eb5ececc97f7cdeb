//! Step definitions shared by the interface features.

pub mod consignment_store;
pub mod shipping_service;

use std::sync::Arc;

use consignment_service::clients::MockVesselAllocator;
use consignment_service::proto::consignment::{Consignment, Container, Response};
use consignment_service::services::ConsignmentService;
use consignment_service::storage::MockConsignmentStore;
use cucumber::World;

/// Test context: one store and one vessel allocator per scenario.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ShippingWorld {
    store: Arc<MockConsignmentStore>,
    vessels: Arc<MockVesselAllocator>,
    pending: Option<Consignment>,
    last_response: Option<Response>,
    last_error: Option<String>,
    listings: Vec<Vec<Consignment>>,
}

impl ShippingWorld {
    fn new() -> Self {
        Self {
            store: Arc::new(MockConsignmentStore::new()),
            vessels: Arc::new(MockVesselAllocator::new()),
            pending: None,
            last_response: None,
            last_error: None,
            listings: Vec::new(),
        }
    }

    fn service(&self) -> ConsignmentService {
        ConsignmentService::new(self.store.clone(), self.vessels.clone())
    }
}

fn make_consignment(id: &str, weight: i32, containers: &[&str]) -> Consignment {
    Consignment {
        id: id.to_string(),
        description: format!("consignment {}", id),
        weight,
        containers: containers
            .iter()
            .map(|c| Container {
                id: c.to_string(),
                ..Default::default()
            })
            .collect(),
        vessel_id: String::new(),
    }
}

fn split_list(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
