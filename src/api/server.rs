//! HTTP server lifecycle.
//!
//! Bind → serve → graceful shutdown. `serve` blocks until ctrl-c for the
//! normal binary path; `spawn_on` binds an arbitrary address and returns
//! a handle with a shutdown channel, which tests use with port 0.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::sync::oneshot;

use crate::api::router::app_router;
use crate::api::types::ApiContext;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Handle to a spawned server: the bound address plus a shutdown channel.
pub struct ServerHandle {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ServerHandle {
    /// Shut down the server gracefully. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Server shutdown signal sent");
        }
    }
}

/// Serve the application on `addr` until ctrl-c.
pub async fn serve(addr: SocketAddr, ctx: ApiContext) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let bound = listener.local_addr()?;
    tracing::info!(%bound, "Listening");

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("Shutdown requested");
    };

    axum::serve(listener, app_router(ctx))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Bind `addr` and serve in a background task. Returns once the listener
/// is bound, so the caller knows the final address (port 0 supported).
pub async fn spawn_on(addr: SocketAddr, ctx: ApiContext) -> Result<ServerHandle, ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let bound = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let app = app_router(ctx);

    tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
        };

        tracing::info!(%bound, "Server started");
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Server error: {e}");
        }
        tracing::info!("Server stopped");
    });

    Ok(ServerHandle {
        addr: bound,
        shutdown_tx: Some(shutdown_tx),
    })
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Arc;

    use super::*;
    use crate::db::open_database;
    use crate::reference::DiseaseReference;

    fn test_ctx() -> (ApiContext, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("patients.db");
        open_database(&db_path).unwrap();
        let reference = Arc::new(DiseaseReference::from_entries(Vec::new()));
        (ApiContext::new(db_path, reference), tmp)
    }

    #[tokio::test]
    async fn spawn_binds_an_ephemeral_port() {
        let (ctx, _tmp) = test_ctx();
        let mut server = spawn_on(
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
            ctx,
        )
        .await
        .expect("server should start");

        assert!(server.addr.port() > 0);
        server.shutdown();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let (ctx, _tmp) = test_ctx();
        let mut server = spawn_on(
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
            ctx,
        )
        .await
        .expect("server should start");

        server.shutdown();
        server.shutdown(); // Second call should be safe
    }
}
