//! consignment-service: shipping gRPC service
//!
//! Accepts consignments, allocates each to a vessel via the vessel service,
//! and keeps the allocated records for listing.
//!
//! ## Architecture
//! ```text
//! [Client] -> [consignment-service] -> [vessel-service: FindAvailable]
//!                     |
//!                     v
//!             [Consignment Store]
//! ```
//!
//! ## Configuration
//! - `--config <path>` or SHIPPING_CONFIG: YAML configuration file
//! - SHIPPING__SERVER__PORT: listen port (default 50051)
//! - SHIPPING__VESSEL__ADDRESS: vessel service address (default localhost:50052)
//! - SHIPPING__VESSEL__TIMEOUT_MS: per-call allocation deadline (default none)
//! - SHIPPING__VESSEL__RETRY__MAX_RETRIES: allocation retries (default 0)
//! - SHIPPING_LOG: tracing filter (default info)

use std::sync::Arc;

use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::{error, info};

use consignment_service::clients::{RetryingVesselAllocator, VesselAllocator};
use consignment_service::config::Config;
use consignment_service::proto::consignment::shipping_service_server::ShippingServiceServer;
use consignment_service::services::ConsignmentService;
use consignment_service::storage::init_storage;
use consignment_service::transport::{grpc_trace_layer, serve_with_shutdown};
use consignment_service::utils::bootstrap::{
    connect_vessel_service, init_tracing, parse_config_path,
};

const SERVICE_NAME: &str = "consignment";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();

    let config_path = parse_config_path();
    let config = Config::load(config_path.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Starting consignment service");

    let store = init_storage(&config.storage);

    let vessel_client = connect_vessel_service(&config.vessel).await?;
    let vessels: Arc<dyn VesselAllocator> = if config.vessel.retry.is_enabled() {
        info!(
            max_retries = config.vessel.retry.max_retries,
            "Allocation retries enabled"
        );
        Arc::new(RetryingVesselAllocator::new(
            vessel_client,
            config.vessel.retry.clone(),
        ))
    } else {
        Arc::new(vessel_client)
    };

    match config.vessel.timeout() {
        Some(limit) => info!(timeout = ?limit, "Allocation timeout enabled"),
        None => info!("Allocation timeout disabled"),
    }

    let service = ConsignmentService::new(store, vessels);

    let (mut health_reporter, health_service) = health_reporter();
    health_reporter
        .set_serving::<ShippingServiceServer<ConsignmentService>>()
        .await;

    let router = Server::builder()
        .layer(grpc_trace_layer())
        .add_service(health_service)
        .add_service(ShippingServiceServer::new(service));

    serve_with_shutdown(
        router,
        &config.server,
        &config.transport,
        SERVICE_NAME,
        shutdown_signal(),
    )
    .await?;

    info!("Consignment service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
