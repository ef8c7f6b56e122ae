//! Error type for the database probe.
//!
//! [`ProbeError`] converts into an HTTP response automatically via
//! [`IntoResponse`], so the `/api/db-test` handler can return
//! `Result<_, ProbeError>` and never has to build an error body by hand.
//! Every variant maps to `500 Internal Server Error` with the
//! `{"status": "error", "message": ...}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::probe::ProbeResponse;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// `DATABASE_URL` was unset or empty at startup.
    #[error("DATABASE_URL is not set.")]
    ConfigurationMissing,

    /// Anything that went wrong while connecting or running the query.
    ///
    /// Bad URLs, unknown schemes, refused connections, auth failures and
    /// query errors all land here; the driver's text is kept verbatim.
    #[error("Database connection failed. Error: {0}")]
    ConnectionFailure(String),
}

impl From<sqlx::Error> for ProbeError {
    fn from(e: sqlx::Error) -> Self {
        Self::ConnectionFailure(e.to_string())
    }
}

impl IntoResponse for ProbeError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "database probe failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ProbeResponse::error(self.to_string())),
        )
            .into_response()
    }
}
