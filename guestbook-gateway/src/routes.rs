//! Axum route handlers for the guestbook API.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use guestbook_core::Comment;
use guestbook_db::{ConnectionRegistry, MemoryBackend};

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Registry = Arc<ConnectionRegistry<MemoryBackend>>;

// ── Request / response types ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateCommentBody {
    pub author: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct CreateCommentResponse {
    pub success: bool,
    pub comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct ListCommentsResponse {
    pub success: bool,
    pub comments: Vec<Comment>,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router with the given connection registry.
pub fn create_router(registry: Registry) -> Router {
    Router::new()
        .route("/v1/comments", get(list_comments).post(create_comment))
        .route("/health", get(health))
        .with_state(registry)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /v1/comments` — list all comments, newest first.
///
/// # Errors
/// Returns [`GatewayError::Db`] if the shared connection cannot be opened.
pub async fn list_comments(
    State(registry): State<Registry>,
) -> Result<impl IntoResponse, GatewayError> {
    let conn = registry.acquire().await?;
    let comments = conn.list_comments();
    Ok(Json(ListCommentsResponse { success: true, comments }))
}

/// `POST /v1/comments` — validate and store a new comment.
///
/// # Errors
/// Returns [`GatewayError::InvalidComment`] if author or body fail
/// validation, or [`GatewayError::Db`] if the shared connection cannot be
/// opened.
pub async fn create_comment(
    State(registry): State<Registry>,
    Json(body): Json<CreateCommentBody>,
) -> Result<impl IntoResponse, GatewayError> {
    let comment = Comment::new(body.author, body.body)?;
    let conn = registry.acquire().await?;
    conn.insert_comment(comment.clone());
    Ok((
        StatusCode::CREATED,
        Json(CreateCommentResponse { success: true, comment }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use guestbook_db::DbConfig;
    use tower::ServiceExt;

    fn test_registry() -> Registry {
        Arc::new(ConnectionRegistry::new(MemoryBackend::new(), DbConfig::new()))
    }

    fn post_comment(author: &str, body: &str) -> Request<Body> {
        let payload = serde_json::json!({"author": author, "body": body});
        match Request::builder()
            .method("POST")
            .uri("/v1/comments")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
        {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        }
    }

    fn get_request(uri: &str) -> Request<Body> {
        match Request::builder().uri(uri).body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        }
    }

    fn get_comments() -> Request<Body> {
        get_request("/v1/comments")
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        }
    }

    #[tokio::test]
    async fn health_response_format_returns_ok_with_status_field() {
        let app = create_router(test_registry());
        let resp = match app.oneshot(get_request("/health")).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn post_then_get_round_trips_the_comment() {
        let app = create_router(test_registry());

        let resp = match app.clone().oneshot(post_comment("Ada", "hello")).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created = body_json(resp).await;
        assert_eq!(created["success"], true);
        assert_eq!(created["comment"]["author"], "Ada");

        let resp = match app.oneshot(get_comments()).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::OK);
        let listed = body_json(resp).await;
        assert_eq!(listed["success"], true);
        assert_eq!(listed["comments"].as_array().map(Vec::len), Some(1));
        assert_eq!(listed["comments"][0]["body"], "hello");
    }

    #[tokio::test]
    async fn comments_list_newest_first() {
        let app = create_router(test_registry());
        for (author, body) in [("Ada", "older"), ("Grace", "newer")] {
            let resp = match app.clone().oneshot(post_comment(author, body)).await {
                Ok(r) => r,
                Err(e) => panic!("handler error: {e}"),
            };
            assert_eq!(resp.status(), StatusCode::CREATED);
        }
        let resp = match app.oneshot(get_comments()).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        let listed = body_json(resp).await;
        assert_eq!(listed["comments"][0]["body"], "newer", "newest comment must come first");
        assert_eq!(listed["comments"][1]["body"], "older");
    }

    #[tokio::test]
    async fn post_empty_author_returns_400_with_message() {
        let app = create_router(test_registry());
        let resp = match app.oneshot(post_comment("", "hello")).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(
            body["message"].as_str().is_some_and(|m| m.contains("author")),
            "error message must name the offending field"
        );
    }

    #[tokio::test]
    async fn handlers_share_one_lazily_opened_connection() {
        let registry = test_registry();
        let app = create_router(Arc::clone(&registry));

        assert!(
            registry.get().is_none(),
            "no connection may exist before the first request"
        );

        let resp = match app.clone().oneshot(post_comment("Ada", "first")).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::CREATED);

        let first_id = match registry.get() {
            Some(conn) => conn.id(),
            None => panic!("first request must have opened the connection"),
        };

        let resp = match app.oneshot(get_comments()).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::OK);

        let second_id = match registry.get() {
            Some(conn) => conn.id(),
            None => panic!("connection must still exist"),
        };
        assert_eq!(first_id, second_id, "requests must share the one connection");
    }
}
