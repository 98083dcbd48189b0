/// Errors produced by the `guestbook-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A required text field was empty after trimming whitespace.
    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// A text field exceeded its maximum allowed length.
    #[error("field '{field}' exceeds maximum length of {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}
