//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid bind address {addr}: {reason}")]
    Address { addr: String, reason: String },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Parse `host:port` into a socket address.
pub fn bind_addr(host: &str, port: u16) -> Result<SocketAddr, ServerError> {
    let addr = format!("{}:{}", host, port);
    addr.parse().map_err(|e: std::net::AddrParseError| ServerError::Address {
        addr,
        reason: e.to_string(),
    })
}

/// Serve `app` on `host:port` until SIGINT or SIGTERM.
///
/// `name` labels the log lines of this server.
pub async fn start_server(
    app: Router,
    name: &'static str,
    host: &str,
    port: u16,
) -> Result<(), ServerError> {
    let addr = bind_addr(host, port)?;
    let handle = Handle::new();

    tracing::info!(server = name, %addr, "Starting server at http://{}", addr);

    shutdown::setup_shutdown_handler(handle.clone());

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!(server = name, "Server stopped");
    Ok(())
}
