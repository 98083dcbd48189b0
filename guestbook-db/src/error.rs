//! Error types for the db crate.

/// Errors that can occur while obtaining the shared connection.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DbError {
    /// The backend failed to open a connection to the database.
    #[error("connection failed: {reason}")]
    ConnectFailed { reason: String },

    /// The backend is not reachable or not properly configured.
    #[error("database unavailable: {reason}")]
    Unavailable { reason: String },

    /// Underlying I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
