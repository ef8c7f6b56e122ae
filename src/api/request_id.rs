//! `X-Request-ID` middleware.
//!
//! Each request carries one ID: the caller's own `X-Request-ID` when it is
//! present and non-empty, otherwise a fresh UUID v4. The ID is inserted as an
//! axum extension, echoed on the response, and wraps the handler in a
//! [`tracing`] span so probe failures can be matched to the request.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument as _;
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Newtype carrying the request's ID as an axum [`Extension`](axum::Extension).
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Apply **inside** `tower_http::TraceLayer` so it runs within the trace span.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(id.clone()));

    let span = tracing::info_span!("request", request_id = %id);
    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
    }

    response
}
