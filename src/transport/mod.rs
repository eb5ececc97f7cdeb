//! Transport layer for the gRPC server and the vessel service channel.
//!
//! Supports:
//! - TCP: Standard network transport (default)
//! - UDS: Unix Domain Sockets for co-located services

use std::future::Future;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use hyper_util::rt::TokioIo;
use serde::Deserialize;
use tokio::net::{UnixListener, UnixStream};
use tokio_stream::wrappers::UnixListenerStream;
use tonic::service::Routes;
use tonic::transport::server::Router;
use tonic::transport::{Channel, Endpoint, Uri};
use tower::service_fn;
use tower::Layer;
use tower::Service;
use tower_http::classify::{GrpcErrorsAsFailures, SharedClassifier};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;

/// Boxed error for transport setup failures.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Transport type discriminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    /// TCP transport (network).
    #[default]
    Tcp,
    /// Unix Domain Socket transport (local IPC).
    Uds,
}

/// Transport configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Transport type discriminator.
    #[serde(rename = "type")]
    pub transport_type: TransportType,
    /// UDS-specific configuration.
    pub uds: UdsConfig,
}

/// UDS transport configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UdsConfig {
    /// Base path for socket files.
    pub base_path: PathBuf,
}

impl Default for UdsConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("/tmp/shipping"),
        }
    }
}

impl UdsConfig {
    /// Get the socket path for a service.
    pub fn socket_path(&self, service_name: &str) -> PathBuf {
        self.base_path.join(format!("{}.sock", service_name))
    }
}

/// RAII guard that removes a UDS socket file on drop.
pub struct UdsCleanupGuard {
    path: PathBuf,
}

impl UdsCleanupGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for UdsCleanupGuard {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to clean up UDS socket"
                );
            }
        }
    }
}

/// Prepare a UDS socket path for binding.
///
/// Creates parent directories, removes a stale socket file, and returns a
/// guard that removes the socket again on drop.
pub fn prepare_uds_socket(path: &Path) -> std::io::Result<UdsCleanupGuard> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if path.exists() {
        info!(path = %path.display(), "Removing stale UDS socket");
        std::fs::remove_file(path)?;
    }

    Ok(UdsCleanupGuard {
        path: path.to_path_buf(),
    })
}

/// Request tracing layer for the gRPC server.
pub fn grpc_trace_layer() -> TraceLayer<SharedClassifier<GrpcErrorsAsFailures>> {
    TraceLayer::new_for_grpc()
}

/// Serve a gRPC router on the configured transport until `signal` completes.
///
/// For UDS the socket lives at `{base_path}/{service_name}.sock`.
pub async fn serve_with_shutdown<L, ResBody, F>(
    router: Router<L>,
    server: &ServerConfig,
    transport: &TransportConfig,
    service_name: &str,
    signal: F,
) -> Result<(), TransportError>
where
    L: Layer<Routes> + Clone,
    L::Service: Service<http::Request<tonic::body::BoxBody>, Response = http::Response<ResBody>>
        + Clone
        + Send
        + 'static,
    <L::Service as Service<http::Request<tonic::body::BoxBody>>>::Future: Send + 'static,
    <L::Service as Service<http::Request<tonic::body::BoxBody>>>::Error:
        Into<Box<dyn std::error::Error + Send + Sync>> + Send,
    ResBody: http_body::Body<Data = bytes::Bytes> + Send + 'static,
    ResBody::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    F: Future<Output = ()> + Send,
{
    match transport.transport_type {
        TransportType::Tcp => {
            let addr: SocketAddr = server.addr().parse()?;
            info!(
                service = %service_name,
                address = %addr,
                transport = "tcp",
                "Server listening"
            );
            router.serve_with_shutdown(addr, signal).await?;
        }
        TransportType::Uds => {
            let socket_path = transport.uds.socket_path(service_name);
            let _guard = prepare_uds_socket(&socket_path)?;

            let stream = UnixListenerStream::new(UnixListener::bind(&socket_path)?);

            info!(
                service = %service_name,
                path = %socket_path.display(),
                transport = "uds",
                "Server listening"
            );

            router.serve_with_incoming_shutdown(stream, signal).await?;
        }
    }

    Ok(())
}

/// Check if an address is a UDS path.
pub fn is_uds_address(address: &str) -> bool {
    address.starts_with('/') || address.starts_with("./")
}

/// Connect to a gRPC service by address.
///
/// Paths starting with `/` or `./` are Unix domain sockets; everything else
/// is a TCP `host:port`, optionally with an `http://` or `https://` scheme.
pub async fn connect_to_address(address: &str) -> Result<Channel, TransportError> {
    if is_uds_address(address) {
        let socket_path = PathBuf::from(address);
        info!(
            path = %socket_path.display(),
            transport = "uds",
            "Connecting to service"
        );

        // The URI is ignored by the connector; tonic only needs it to be valid.
        let channel = Endpoint::try_from("http://[::]:50051")?
            .connect_with_connector(service_fn(move |_: Uri| {
                let path = socket_path.clone();
                async move {
                    let stream = UnixStream::connect(path).await?;
                    Ok::<_, std::io::Error>(TokioIo::new(stream))
                }
            }))
            .await?;

        Ok(channel)
    } else {
        let uri = if address.starts_with("http://") || address.starts_with("https://") {
            address.to_string()
        } else {
            format!("http://{}", address)
        };

        info!(address = %address, transport = "tcp", "Connecting to service");

        let channel = Channel::from_shared(uri)?.connect().await?;
        Ok(channel)
    }
}
