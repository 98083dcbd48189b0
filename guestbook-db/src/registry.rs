//! Shared connection registry — get-or-create with at-most-once construction.
//!
//! The registry owns the single [`Connection`] and hands out borrows of it.
//! Any number of tasks may race on [`ConnectionRegistry::acquire`]; exactly
//! one construction runs per process lifetime.

use tokio::sync::OnceCell;

use crate::{ConnectBackend, Connection, DbConfig, DbError};

/// Lazily-initialized owner of the shared [`Connection`].
///
/// Construct one registry at process start and share it, e.g. behind an
/// `Arc` in router state; the connection itself is opened on first
/// [`acquire`](Self::acquire). The registry is deliberately not a
/// module-level global: each test builds its own instance, and teardown is
/// simply dropping it.
///
/// One registry owns at most one connection for its whole lifetime. This is
/// not a pool and not keyed — callers wanting per-scope instances need a
/// different abstraction.
pub struct ConnectionRegistry<B: ConnectBackend> {
    backend: B,
    config: DbConfig,
    cell: OnceCell<Connection>,
}

impl<B: ConnectBackend> ConnectionRegistry<B> {
    /// Create a registry that will connect through `backend` on first use.
    ///
    /// No connection is opened here; construction is deferred until the
    /// first [`acquire`](Self::acquire).
    #[must_use]
    pub fn new(backend: B, config: DbConfig) -> Self {
        Self {
            backend,
            config,
            cell: OnceCell::new(),
        }
    }

    /// Get the shared connection, opening it if no caller has before.
    ///
    /// Once the connection exists this is the fast path: a lock-free atomic
    /// check and a borrow, never blocking. Callers that find the cell empty
    /// take the slow path: the cell's internal lock is acquired and the
    /// state re-checked, so of the callers racing on first use exactly one
    /// runs [`ConnectBackend::connect`] and the rest observe its result
    /// after it completes. Which racing caller wins is unspecified.
    ///
    /// The cell publishes the value with release/acquire ordering, so every
    /// caller — including fast-path readers racing with the constructor —
    /// sees a fully-constructed connection or none at all.
    ///
    /// # Errors
    /// Returns the [`DbError`] from [`ConnectBackend::connect`] if this
    /// caller's own construction attempt fails. A failure leaves the
    /// registry empty: racing and future callers run their own attempts
    /// until one succeeds, and that success is then permanent.
    pub async fn acquire(&self) -> Result<&Connection, DbError> {
        self.cell
            .get_or_try_init(|| async {
                let conn = self.backend.connect(&self.config).await?;
                tracing::info!(
                    conn = %conn.id(),
                    dsn = %conn.dsn(),
                    "shared connection established"
                );
                Ok(conn)
            })
            .await
    }

    /// Peek at the connection without ever constructing it.
    ///
    /// Returns `None` until some caller's [`acquire`](Self::acquire) has
    /// completed construction.
    #[must_use]
    pub fn get(&self) -> Option<&Connection> {
        self.cell.get()
    }

    /// `true` once a connection has been established.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.cell.initialized()
    }

    /// Check backend reachability without touching the connection state.
    ///
    /// # Errors
    /// Propagates errors from [`ConnectBackend::health_check`].
    pub async fn health_check(&self) -> Result<(), DbError> {
        self.backend.health_check().await
    }
}
