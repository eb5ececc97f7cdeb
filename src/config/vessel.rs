//! Vessel service client configuration.

use std::time::Duration;

use serde::Deserialize;

/// How the consignment service reaches the vessel service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VesselClientConfig {
    /// gRPC address (host:port or UDS path).
    pub address: String,
    /// Per-call deadline for `FindAvailable`. None = wait indefinitely.
    pub timeout_ms: Option<u64>,
    /// Connection attempts at startup before giving up.
    pub connect_retries: usize,
    /// Per-request retry policy. Disabled by default.
    pub retry: AllocationRetryConfig,
}

impl Default for VesselClientConfig {
    fn default() -> Self {
        Self {
            address: "localhost:50052".to_string(),
            timeout_ms: None,
            connect_retries: 30,
            retry: AllocationRetryConfig::default(),
        }
    }
}

impl VesselClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Retry policy for allocation calls.
///
/// With `max_retries = 0` an allocation failure fails the request
/// immediately. Only transport-level failures are ever retried.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AllocationRetryConfig {
    /// Retries after the first attempt.
    pub max_retries: usize,
    /// Delay before the first retry.
    pub min_delay_ms: u64,
    /// Backoff ceiling.
    pub max_delay_ms: u64,
}

impl Default for AllocationRetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            min_delay_ms: 10,
            max_delay_ms: 2000,
        }
    }
}

impl AllocationRetryConfig {
    pub fn is_enabled(&self) -> bool {
        self.max_retries > 0
    }
}
