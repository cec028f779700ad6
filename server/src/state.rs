//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds one pooled HTTP client for the quote proxy and the upstream
//! base URL that client talks to. The client's request timeout bounds
//! every proxied call.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

/// Connect timeout for the upstream client, independent of the request timeout.
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Shared application state. Clone is cheap; the client is internally
/// reference-counted and the upstream is an `Arc<str>`.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub quotable_upstream: Arc<str>,
}

impl AppState {
    /// Build state for `upstream` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(upstream: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .user_agent(concat!("quoteboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, quotable_upstream: Arc::from(upstream.trim_end_matches('/')) })
    }

    /// # Errors
    ///
    /// See [`AppState::new`].
    pub fn from_config(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.quotable_upstream, config.proxy_timeout)
    }
}
