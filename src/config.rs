//! Configuration for hello-api.
//!
//! Config is read once at startup from the process environment and handed to
//! the handlers through axum state. Nothing downstream reads env vars itself.
//!
//! | Variable       | Default   | Meaning                                   |
//! |----------------|-----------|-------------------------------------------|
//! | `DATABASE_URL` | unset     | Connection string probed by `/api/db-test` |
//! | `BIND_ADDR`    | `0.0.0.0` | Listen address                            |
//! | `PORT`         | `8080`    | Listen port                               |
//!
//! A missing `DATABASE_URL` is not a startup error: it is only reported when
//! `/api/db-test` is called. Malformed `BIND_ADDR` / `PORT` values are
//! rejected before the server opens any ports.

use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

/// Top-level service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection string. `None` when unset or empty.
    pub database_url: Option<String>,
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            bind_addr: defaults::bind_addr(),
            port: defaults::port(),
        }
    }
}

impl Config {
    /// Load config from the real process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary variable lookup.
    ///
    /// Tests use this to inject values without mutating process-global env.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .with_context(|| format!("BIND_ADDR `{raw}` is not a valid IP address"))?,
            None => defaults::bind_addr(),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT `{raw}` is not a valid port number"))?,
            None => defaults::port(),
        };

        Ok(Self {
            database_url,
            bind_addr,
            port,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

mod defaults {
    use std::net::{IpAddr, Ipv4Addr};

    pub fn bind_addr() -> IpAddr { IpAddr::V4(Ipv4Addr::UNSPECIFIED) }
    pub fn port() -> u16 { 8080 }
}
