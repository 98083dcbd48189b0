//! Database connection handle — the process-wide shared resource.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use guestbook_core::{Comment, CommentId, ConnectionId};

/// A handle to the guestbook database.
///
/// Exactly one `Connection` exists per [`ConnectionRegistry`]; callers obtain
/// a shared borrow through [`ConnectionRegistry::acquire`] and never own the
/// handle themselves. The handle stays valid for the registry's lifetime.
///
/// # MVP note
/// Comments are held in an insertion-ordered in-memory map standing in for a
/// real MySQL session. The wire protocol is not yet wired up; this is
/// intentional for the MVP stage.
///
/// [`ConnectionRegistry`]: crate::ConnectionRegistry
/// [`ConnectionRegistry::acquire`]: crate::ConnectionRegistry::acquire
#[derive(Debug)]
pub struct Connection {
    id: ConnectionId,
    dsn: String,
    opened_at: DateTime<Utc>,
    comments: RwLock<IndexMap<CommentId, Comment>>,
}

impl Connection {
    /// Open a connection for the given DSN.
    ///
    /// Normally called from a [`ConnectBackend`](crate::ConnectBackend)
    /// implementation; the registry, not the caller, decides when this runs.
    #[must_use]
    pub fn open(dsn: impl Into<String>) -> Self {
        Self {
            id: ConnectionId::new(),
            dsn: dsn.into(),
            opened_at: Utc::now(),
            comments: RwLock::new(IndexMap::new()),
        }
    }

    /// Identifier assigned when this connection was opened.
    #[must_use]
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// The DSN this connection was opened with (password-free).
    #[must_use]
    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    /// Timestamp when this connection was opened.
    #[must_use]
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Log a statement against the connection.
    ///
    /// Fire-and-forget: nothing is returned, no state changes, and there is
    /// no error path.
    pub fn execute(&self, statement: &str) {
        tracing::info!(conn = %self.id, %statement, "executing statement");
    }

    /// Store a comment and return its ID.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned (a previous thread
    /// panicked while holding the write lock).
    pub fn insert_comment(&self, comment: Comment) -> CommentId {
        self.execute("INSERT INTO comments (author, body, created_at) VALUES (?, ?, ?)");
        let id = comment.id;
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.comments
            .write()
            .expect("comment store write lock poisoned")
            .insert(id, comment);
        id
    }

    /// Return all comments, newest first.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn list_comments(&self) -> Vec<Comment> {
        self.execute("SELECT id, author, body, created_at FROM comments ORDER BY created_at DESC");
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let comments = self.comments.read().expect("comment store read lock poisoned");
        comments.values().rev().cloned().collect()
    }

    /// Number of stored comments.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn comment_count(&self) -> usize {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let comments = self.comments.read().expect("comment store read lock poisoned");
        comments.len()
    }
}
