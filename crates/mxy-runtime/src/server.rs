//! HTTP server for the MXY application runtime
//!
//! Binding and serving are separate steps; the bound address (port 0 resolves
//! to an ephemeral port) is known before requests are served.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::context::ApplicationContext;
use crate::error::{RuntimeError, RuntimeResult};

/// Server that has not bound its listener yet
#[derive(Debug, Clone)]
pub struct ApplicationServer {
    context: Arc<ApplicationContext>,
}

/// Server with a bound listener, ready to serve
#[derive(Debug)]
pub struct BoundServer {
    context: Arc<ApplicationContext>,
    listener: TcpListener,
    address: SocketAddr,
}

impl ApplicationServer {
    pub fn new(context: Arc<ApplicationContext>) -> Self {
        Self { context }
    }

    /// Bind the configured address
    pub async fn bind(self) -> RuntimeResult<BoundServer> {
        let address = self.context.config().bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| RuntimeError::BindError {
                address: address.clone(),
                source,
            })?;
        let address = listener.local_addr()?;
        info!("Listening on {}", address);

        Ok(BoundServer {
            context: self.context,
            listener,
            address,
        })
    }
}

impl BoundServer {
    /// The actual bound address
    pub fn address(&self) -> SocketAddr {
        self.address
    }

    /// Serve until shutdown begins, then drain in-flight requests.
    pub async fn serve(self) -> RuntimeResult<()> {
        let shutdown = self.context.shutdown();
        let drain_timeout = Duration::from_secs(self.context.config().server.shutdown_timeout_secs);
        let app = crate::api::build_router(self.context.clone());

        let graceful = {
            let shutdown = shutdown.clone();
            async move { shutdown.wait().await }
        };
        let mut server = tokio::spawn(async move {
            axum::serve(self.listener, app)
                .with_graceful_shutdown(graceful)
                .await
        });

        tokio::select! {
            result = &mut server => {
                result??;
                return Ok(());
            }
            _ = shutdown.wait() => {
                info!("Shutting down, draining for up to {:?}", drain_timeout);
            }
        }

        match tokio::time::timeout(drain_timeout, &mut server).await {
            Ok(result) => {
                result??;
                info!("Server stopped");
            }
            Err(_) => {
                warn!("Drain timeout of {:?} elapsed, aborting open connections", drain_timeout);
                server.abort();
            }
        }

        Ok(())
    }
}
