//! Server setup and lifecycle management

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::error::{ServiceError, ServiceResult};
use crate::router::create_router;
use crate::state::AppState;

/// Envelope evaluation HTTP server
pub struct Server {
    listen_addr: SocketAddr,
}

impl Server {
    /// Create a new server bound to the given address
    pub fn new(listen_addr: SocketAddr) -> Self {
        Self { listen_addr }
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run(self) -> ServiceResult<()> {
        let state = AppState::new();
        let app = create_router(state);

        let listener = TcpListener::bind(self.listen_addr).await?;

        tracing::info!("envelope evaluator listening on {}", self.listen_addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServiceError::Server(e.to_string()))?;

        tracing::info!("envelope evaluator shutting down");

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
