//! Interface tests for the consignment store and the allocation workflow.
//!
//! ```bash
//! cargo test --test interfaces
//! ```

mod steps;

use cucumber::World;
use steps::ShippingWorld;

#[tokio::main]
async fn main() {
    ShippingWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit("tests/interfaces/features")
        .await;
}
