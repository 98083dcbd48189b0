//! Entry point for the `guestbook-gateway` HTTP server.

use std::sync::Arc;

use guestbook_db::{ConnectionRegistry, DbConfig, MemoryBackend};
use guestbook_gateway::routes::create_router;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("GUESTBOOK_LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_owned());

    // The registry is built here, once; the connection it guards is opened
    // lazily by whichever request wins the first acquire.
    let registry = Arc::new(ConnectionRegistry::new(
        MemoryBackend::new(),
        DbConfig::from_env(),
    ));
    let app = create_router(registry);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "guestbook-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
