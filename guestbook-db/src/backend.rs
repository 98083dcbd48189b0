//! Connection backend abstraction trait.
//!
//! Allows swapping the in-memory backend for a real wire client
//! without changing the registry logic.

use async_trait::async_trait;

use crate::{Connection, DbConfig, DbError};

/// Database connection factory.
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
/// The registry calls [`connect`](Self::connect) at most once per successful
/// construction; implementations need not deduplicate calls themselves.
///
/// # Cancel Safety
/// `connect` must be cancel safe: dropping the future before completion must
/// not leak a half-opened connection.
#[async_trait]
pub trait ConnectBackend: Send + Sync {
    /// Open a new connection using the given configuration.
    ///
    /// # Errors
    /// Returns [`DbError::ConnectFailed`] if the database refuses or drops
    /// the connection attempt.
    async fn connect(&self, config: &DbConfig) -> Result<Connection, DbError>;

    /// Check that the backend can reach the database at all.
    ///
    /// # Errors
    /// Returns [`DbError::Unavailable`] if the environment is not ready.
    async fn health_check(&self) -> Result<(), DbError>;
}

/// In-memory backend standing in for a MySQL client.
///
/// Connects instantly and never fails. Emits the once-per-process
/// "opening database connection" log event when construction runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryBackend;

impl MemoryBackend {
    /// Create a new in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConnectBackend for MemoryBackend {
    async fn connect(&self, config: &DbConfig) -> Result<Connection, DbError> {
        let dsn = config.dsn();
        tracing::info!(%dsn, "opening database connection");
        Ok(Connection::open(dsn))
    }

    async fn health_check(&self) -> Result<(), DbError> {
        Ok(())
    }
}
