//! Guestbook comment domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::CoreError, id::CommentId};

/// Maximum length of a comment author name, in characters.
pub const MAX_AUTHOR_LEN: usize = 120;

/// Maximum length of a comment body, in characters.
pub const MAX_BODY_LEN: usize = 4000;

/// A single guestbook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Comment {
    /// Unique identifier assigned at creation.
    pub id: CommentId,

    /// Display name of the person leaving the comment.
    pub author: String,

    /// The comment text.
    pub body: String,

    /// Timestamp when the comment was created.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a validated comment with a fresh ID and the current timestamp.
    ///
    /// Both fields are trimmed; surrounding whitespace is never stored.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyField`] if `author` or `body` is empty after
    /// trimming, or [`CoreError::FieldTooLong`] if either exceeds its maximum
    /// length ([`MAX_AUTHOR_LEN`], [`MAX_BODY_LEN`]).
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Result<Self, CoreError> {
        let author = validate_field("author", &author.into(), MAX_AUTHOR_LEN)?;
        let body = validate_field("body", &body.into(), MAX_BODY_LEN)?;
        Ok(Self {
            id: CommentId::new(),
            author,
            body,
            created_at: Utc::now(),
        })
    }
}

fn validate_field(
    field: &'static str,
    value: &str,
    max_len: usize,
) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyField { field });
    }
    if trimmed.chars().count() > max_len {
        return Err(CoreError::FieldTooLong { field, max: max_len });
    }
    Ok(trimmed.to_owned())
}
