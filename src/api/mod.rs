//! HTTP surface of hello-api.
//!
//! Handlers translate HTTP concerns (status codes, JSON bodies) into calls to
//! [`crate::probe`] and back. All routes live under `/api`.

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use crate::state::AppState;

pub mod db_test;
pub mod hello;
pub mod request_id;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/hello", get(hello::hello))
        .route("/api/db-test", get(db_test::db_test))
        .fallback(not_found)
        .with_state(state)
}

/// Fallback for unknown paths: `404` with `{"detail": "Not Found"}`.
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}
