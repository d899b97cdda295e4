//! Server execution logic.

use std::{error::Error, future::Future, net::SocketAddr, sync::Arc, time::Duration};

use axum::{Router, routing::get};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::Instrument;

use crate::config::ServerConfig;

use super::{
    handler::{
        http::{get_room_detail, get_rooms, health_check},
        session::{SessionError, handle_session},
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Back-off after a failed `accept` (e.g. too many open files)
const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// Planning poker server
///
/// Accepts voting clients over TCP and, when configured, serves the read-only
/// HTTP status API on a second listener.
///
/// # Example
///
/// ```ignore
/// let state = Arc::new(AppState::new(registry, clock, config.timing));
/// Server::new(config, state).run().await?;
/// ```
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Bind the configured listeners and serve until Ctrl+C / SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if a listener fails to bind or the HTTP server fails.
    pub async fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let listener = TcpListener::bind(self.config.tcp_addr()).await?;
        let http_listener = match self.config.http_addr() {
            Some(addr) => Some(TcpListener::bind(addr).await?),
            None => None,
        };

        tracing::info!("Press Ctrl+C to shutdown gracefully");
        self.serve(listener, http_listener, shutdown_signal()).await
    }

    /// Serve on already-bound listeners until `shutdown` resolves.
    pub async fn serve(
        self,
        listener: TcpListener,
        http_listener: Option<TcpListener>,
        shutdown: impl Future<Output = ()> + Send,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let cancel = CancellationToken::new();

        let http_task = match http_listener {
            Some(http_listener) => {
                tracing::info!("HTTP status API listening on {}", http_listener.local_addr()?);
                let app = router(self.state.clone());
                let cancel = cancel.clone();
                Some(tokio::spawn(async move {
                    axum::serve(http_listener, app)
                        .with_graceful_shutdown(async move { cancel.cancelled().await })
                        .await
                }))
            }
            None => None,
        };

        tracing::info!("Voting server listening on {}", listener.local_addr()?);

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        tokio::spawn(handle_connection(stream, peer, self.state.clone()));
                    }
                    Err(e) => {
                        tracing::warn!("Failed to accept connection: {}", e);
                        tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                    }
                },
            }
        }

        cancel.cancel();
        if let Some(http_task) = http_task {
            http_task.await??;
        }

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Routes of the read-only HTTP status API
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/{room_id}", get(get_room_detail))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_connection(stream: TcpStream, peer: SocketAddr, state: Arc<AppState>) {
    let span = tracing::info_span!(
        "session",
        %peer,
        room_id = tracing::field::Empty,
        connection_id = tracing::field::Empty,
    );

    async move {
        tracing::info!("Client connected");
        match handle_session(stream, state).await {
            Ok(()) => tracing::info!("Client left"),
            Err(SessionError::ConnectionLost) => tracing::info!("Client disconnected"),
            Err(e) => tracing::info!("Session ended: {}", e),
        }
    }
    .instrument(span)
    .await
}
