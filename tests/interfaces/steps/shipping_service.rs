//! Allocation workflow step definitions.

use consignment_service::clients::mock::vessel;
use consignment_service::proto::vessel::Specification;
use cucumber::{given, then, when};

use super::{make_consignment, split_list, ShippingWorld};

#[given(expr = "the vessel service offers vessel {string} named {string}")]
async fn offers_vessel(world: &mut ShippingWorld, id: String, name: String) {
    world.vessels.set_vessel(Some(vessel(&id, &name))).await;
}

#[given("the vessel service has no vessels")]
async fn no_vessels(world: &mut ShippingWorld) {
    world.vessels.set_vessel(None).await;
}

#[given("the vessel service is unreachable")]
async fn unreachable(world: &mut ShippingWorld) {
    world.vessels.set_vessel(Some(vessel("V1", "Boaty"))).await;
    world.vessels.set_fail_on_find(true).await;
}

#[given(expr = "the vessel service allocates vessels {string} in turn")]
async fn allocates_in_turn(world: &mut ShippingWorld, ids: String) {
    let vessels: Vec<_> = split_list(&ids)
        .into_iter()
        .map(|id| vessel(id, &format!("Vessel {}", id)))
        .collect();
    world.vessels.queue_vessels(vessels).await;
}

#[given("the store rejects writes")]
async fn store_rejects(world: &mut ShippingWorld) {
    world.store.set_fail_on_create(true).await;
}

#[given(expr = "a consignment {string} weighing {int} with containers {string}")]
async fn pending_consignment(world: &mut ShippingWorld, id: String, weight: i32, containers: String) {
    world.pending = Some(make_consignment(&id, weight, &split_list(&containers)));
}

#[given(expr = "a consignment {string} weighing {int} with no containers")]
async fn pending_empty_consignment(world: &mut ShippingWorld, id: String, weight: i32) {
    world.pending = Some(make_consignment(&id, weight, &[]));
}

#[given(expr = "the consignment claims vessel {string}")]
async fn claims_vessel(world: &mut ShippingWorld, vessel_id: String) {
    world
        .pending
        .as_mut()
        .expect("no pending consignment")
        .vessel_id = vessel_id;
}

#[given(expr = "consignment {string} weighing {int} has been created")]
async fn already_created(world: &mut ShippingWorld, id: String, weight: i32) {
    world
        .service()
        .create(make_consignment(&id, weight, &["A"]))
        .await
        .expect("create failed");
}

#[when("the consignment is created")]
async fn create(world: &mut ShippingWorld) {
    let consignment = world.pending.take().expect("no pending consignment");
    match world.service().create(consignment).await {
        Ok(response) => {
            world.last_response = Some(response);
            world.last_error = None;
        }
        Err(e) => {
            world.last_response = None;
            world.last_error = Some(e.to_string());
        }
    }
}

#[when("the consignments are listed twice")]
async fn list_twice(world: &mut ShippingWorld) {
    let service = world.service();
    for _ in 0..2 {
        let response = service.list().await.expect("list failed");
        assert!(!response.created);
        world.listings.push(response.consignments);
    }
}

#[then(expr = "the consignment is created on vessel {string}")]
async fn created_on(world: &mut ShippingWorld, vessel_id: String) {
    let response = world
        .last_response
        .as_ref()
        .unwrap_or_else(|| panic!("create failed: {:?}", world.last_error));
    assert!(response.created);
    let consignment = response.consignment.as_ref().expect("no consignment in response");
    assert_eq!(consignment.vessel_id, vessel_id);
}

#[then(expr = "the vessel service was asked for capacity {int} and max weight {int}")]
async fn asked_for(world: &mut ShippingWorld, capacity: i32, max_weight: i32) {
    let requests = world.vessels.requests().await;
    assert_eq!(
        requests.last(),
        Some(&Specification {
            capacity,
            max_weight
        })
    );
}

#[then(expr = "the vessel service was called {int} times")]
async fn called_times(world: &mut ShippingWorld, count: usize) {
    assert_eq!(world.vessels.call_count().await, count);
}

#[then(expr = "the request fails with {string}")]
async fn fails_with(world: &mut ShippingWorld, fragment: String) {
    assert!(world.last_response.is_none(), "expected no response payload");
    let error = world.last_error.as_deref().expect("expected an error");
    assert!(
        error.contains(&fragment),
        "error {:?} does not mention {:?}",
        error,
        fragment
    );
}

#[then("both listings are identical")]
async fn listings_identical(world: &mut ShippingWorld) {
    assert_eq!(world.listings.len(), 2);
    assert_eq!(world.listings[0], world.listings[1]);
}

#[then(expr = "the listing shows {string} on {string} then {string} on {string}")]
async fn listing_order(
    world: &mut ShippingWorld,
    first: String,
    first_vessel: String,
    second: String,
    second_vessel: String,
) {
    let listing = world.listings.last().expect("nothing listed");
    let pairs: Vec<_> = listing
        .iter()
        .map(|c| (c.id.clone(), c.vessel_id.clone()))
        .collect();
    assert_eq!(pairs, vec![(first, first_vessel), (second, second_vessel)]);
}

#[then("the listing is empty")]
async fn listing_empty(world: &mut ShippingWorld) {
    assert!(world.listings.last().expect("nothing listed").is_empty());
}
