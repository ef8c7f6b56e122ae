//! Database round trip: connect, `SELECT 1`, close.
//!
//! The driver is chosen from the URL scheme by sqlx's `Any` backend, so the
//! same code path serves `postgres://` in production and `sqlite::memory:` in
//! tests. There is no pool: every probe opens its own connection and closes
//! it before returning.

use serde::Serialize;
use sqlx::{AnyConnection, Connection};

use crate::error::ProbeError;

/// Outcome reported in the `status` field of a probe response.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Success,
    Error,
}

/// JSON body returned by `/api/db-test`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: ProbeStatus,
    pub message: String,
}

impl ProbeResponse {
    pub fn success() -> Self {
        Self {
            status: ProbeStatus::Success,
            message: "Database connection successful!".into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Error,
            message: message.into(),
        }
    }
}

/// Run one connect → `SELECT 1` → close sequence against `url`.
///
/// If connecting fails nothing is held. Once connected, the connection is
/// closed whether or not the query succeeded; a query error takes precedence
/// over a close error.
pub async fn round_trip(url: &str) -> Result<(), ProbeError> {
    // Idempotent; guarded by a `Once` inside sqlx.
    sqlx::any::install_default_drivers();

    let mut conn = AnyConnection::connect(url).await?;
    let queried = sqlx::query("SELECT 1").execute(&mut conn).await;
    let closed = conn.close().await;

    queried?;
    closed?;
    Ok(())
}
