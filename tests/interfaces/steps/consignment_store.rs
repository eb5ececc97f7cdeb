//! ConsignmentStore contract step definitions.

use std::collections::HashSet;
use std::sync::Arc;

use consignment_service::storage::ConsignmentStore;
use cucumber::{given, then, when};

use super::{make_consignment, ShippingWorld};

#[given("an empty consignment store")]
async fn empty_store(world: &mut ShippingWorld) {
    let all = world.store.get_all().await.expect("get_all failed");
    assert!(all.is_empty(), "expected a fresh store");
}

#[when(expr = "consignment {string} bound to vessel {string} is stored")]
async fn store_consignment(world: &mut ShippingWorld, id: String, vessel_id: String) {
    let mut consignment = make_consignment(&id, 10, &["A"]);
    consignment.vessel_id = vessel_id;

    let stored = world
        .store
        .create(consignment.clone())
        .await
        .expect("create failed");
    assert_eq!(stored, consignment, "create must return the record unchanged");
}

#[when(expr = "{int} consignments are stored concurrently")]
async fn store_concurrently(world: &mut ShippingWorld, count: usize) {
    let handles: Vec<_> = (0..count)
        .map(|i| {
            let store = Arc::clone(&world.store);
            tokio::spawn(async move {
                let mut consignment = make_consignment(&format!("c-{}", i), 10, &["A"]);
                consignment.vessel_id = "V1".to_string();
                store.create(consignment).await
            })
        })
        .collect();

    for handle in handles {
        handle
            .await
            .expect("task panicked")
            .expect("create failed");
    }
}

#[then(expr = "the store holds {int} consignments")]
async fn store_holds(world: &mut ShippingWorld, count: usize) {
    let all = world.store.get_all().await.expect("get_all failed");
    assert_eq!(all.len(), count);
}

#[then(expr = "stored consignment {int} is {string} on vessel {string}")]
async fn stored_at(world: &mut ShippingWorld, position: usize, id: String, vessel_id: String) {
    let all = world.store.get_all().await.expect("get_all failed");
    let record = all
        .get(position - 1)
        .unwrap_or_else(|| panic!("no consignment at position {}", position));
    assert_eq!(record.id, id);
    assert_eq!(record.vessel_id, vessel_id);
}

#[then("every stored consignment id is unique")]
async fn ids_unique(world: &mut ShippingWorld) {
    let all = world.store.get_all().await.expect("get_all failed");
    let ids: HashSet<_> = all.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), all.len());
    assert!(all.iter().all(|c| !c.vessel_id.is_empty()));
}
