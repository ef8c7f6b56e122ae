//! Greeting endpoint.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const GREETING: &str = "Hello from the Python Backend!";

/// `GET /api/hello` — always returns 200 OK with the fixed greeting.
///
/// Touches no state and never fails, so it doubles as a liveness probe.
pub async fn hello() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "message": GREETING })))
}
