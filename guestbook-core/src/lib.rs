//! Core types for the guestbook backend.
//!
//! Defines the fundamental domain types: comments, identifiers, and the
//! validation errors they produce.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod comment;
pub mod error;
pub mod id;

pub use comment::{Comment, MAX_AUTHOR_LEN, MAX_BODY_LEN};
pub use error::CoreError;
pub use id::{CommentId, ConnectionId};
