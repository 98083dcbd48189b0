//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// An error propagated from the connection layer.
    #[error("database error: {0}")]
    Db(#[from] guestbook_db::DbError),

    /// The submitted comment failed validation.
    #[error("invalid comment: {0}")]
    InvalidComment(#[from] guestbook_core::CoreError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::InvalidComment(_) => StatusCode::BAD_REQUEST,
        };
        (
            status,
            Json(json!({"success": false, "message": self.to_string()})),
        )
            .into_response()
    }
}
