//! Alert server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use alertapp_store::AlertStore;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::routes::create_router;
use crate::state::AppState;

/// HTTP server for the alert API.
///
/// The store is injected at construction, so callers decide which backend
/// the server uses and can keep a handle to it.
#[derive(Debug, Clone)]
pub struct AlertServer {
    state: Arc<AppState>,
}

impl AlertServer {
    /// Create a new alert server around the given store.
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn AlertStore>) -> Self {
        let state = Arc::new(AppState::new(config, store));
        Self { state }
    }

    /// Get the shared state.
    #[must_use]
    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        self.state.config()
    }

    /// Start the server and listen for connections.
    ///
    /// This method runs until the server encounters a fatal error.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the address fails.
    pub async fn serve(&self, addr: SocketAddr) -> ServerResult<()> {
        self.serve_with_shutdown(addr, std::future::pending()).await
    }

    /// Start the server with graceful shutdown support.
    ///
    /// The server will shut down when the provided future completes.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the address fails.
    pub async fn serve_with_shutdown<F>(&self, addr: SocketAddr, shutdown: F) -> ServerResult<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindFailed(addr, e))?;

        self.serve_listener(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails while accepting connections.
    pub async fn serve_listener<F>(&self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = listener
            .local_addr()
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        info!(
            addr = %addr,
            alerts = self.state.store().len(),
            "Alert server listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        info!("Alert server shut down");
        Ok(())
    }

    /// Create the router without starting the server.
    ///
    /// Useful for testing or embedding in another server.
    pub fn router(&self) -> axum::Router {
        create_router(self.state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alertapp_store::{Alert, InMemoryAlertStore};
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn make_test_server() -> (AlertServer, Arc<InMemoryAlertStore>) {
        let store = Arc::new(InMemoryAlertStore::new());
        let server = AlertServer::new(ServerConfig::default(), store.clone());
        (server, store)
    }

    #[test]
    fn test_server_clone_shares_store() {
        let (server, store) = make_test_server();
        let cloned = server.clone();

        cloned.state().store().store(Alert::new("Spooky"));

        assert_eq!(store.len(), 1);
        assert_eq!(server.state().store().len(), 1);
    }

    #[test]
    fn test_server_config() {
        let (server, _store) = make_test_server();
        assert_eq!(server.config().default_page_size, 20);
    }

    #[tokio::test]
    async fn test_serve_with_shutdown() {
        let (server, _store) = make_test_server();
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let server_handle = tokio::spawn(async move {
            server
                .serve_with_shutdown(addr, async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        let _ = shutdown_tx.send(());

        let result = tokio::time::timeout(Duration::from_secs(1), server_handle).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_serve_listener_over_tcp() {
        let (server, store) = make_test_server();
        store.store(Alert::new("Spooky"));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let server_handle = tokio::spawn(async move {
            server
                .serve_listener(listener, async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();

        assert!(raw.starts_with("HTTP/1.1 200 OK"));
        assert!(raw.to_ascii_lowercase().contains("x-alertapp-count: 1"));
        assert!(raw.contains("Spooky"));

        let _ = shutdown_tx.send(());
        let result = tokio::time::timeout(Duration::from_secs(1), server_handle).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_serve_bind_conflict() {
        let (server, _store) = make_test_server();

        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let result = server.serve(addr).await;

        assert!(matches!(result, Err(ServerError::BindFailed(a, _)) if a == addr));
    }
}
