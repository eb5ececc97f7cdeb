//! Bootstrap utilities for the consignment service binary.

use std::time::Duration;

use backon::Retryable;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::clients::GrpcVesselClient;
use crate::config::{VesselClientConfig, LOG_ENV_VAR};
use crate::transport::connect_to_address;
use crate::utils::retry::connection_backoff;

/// Initialize tracing with the SHIPPING_LOG environment variable.
///
/// Defaults to "info" level if SHIPPING_LOG is not set.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Parse `--config <path>` or `--config=<path>` from the process arguments.
pub fn parse_config_path() -> Option<String> {
    config_path_from_args(std::env::args().skip(1))
}

fn config_path_from_args(args: impl IntoIterator<Item = String>) -> Option<String> {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" || arg == "-c" {
            return args.next();
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(path.to_string());
        }
    }
    None
}

/// Connect to the vessel service, retrying with exponential backoff.
///
/// Only the initial connection is retried here; per-request behaviour is
/// governed by `vessel.timeout_ms` and `vessel.retry`.
pub async fn connect_vessel_service(
    config: &VesselClientConfig,
) -> Result<GrpcVesselClient, String> {
    let address = config.address.clone();
    let channel = (|| {
        let a = address.clone();
        async move { connect_to_address(&a).await.map_err(|e| e.to_string()) }
    })
    .retry(connection_backoff(config.connect_retries))
    .notify(|err: &String, dur: Duration| {
        warn!(service = "vessel", error = %err, delay = ?dur, "Connection failed, retrying");
    })
    .await?;

    tracing::info!(address = %config.address, "Connected to vessel service");
    Ok(GrpcVesselClient::new(channel).with_timeout(config.timeout()))
}
