//! Server configuration parsed from environment variables.
//!
//! `PORT` must be a valid port when set; the other values fall back to
//! their defaults when absent or malformed.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_QUOTABLE_UPSTREAM: &str = "https://api.quotable.io";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 8;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL the `/api/quotable/*` proxy forwards to, without a trailing slash.
    pub quotable_upstream: String,
    pub proxy_timeout: Duration,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `QUOTABLE_UPSTREAM`: default `https://api.quotable.io`
    /// - `PROXY_TIMEOUT_SECS`: default 8, zero is ignored
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a `u16`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let quotable_upstream = lookup("QUOTABLE_UPSTREAM")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_QUOTABLE_UPSTREAM.to_owned());

        let timeout_secs = parse_u64(lookup("PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS);

        Ok(Self { port, quotable_upstream, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}
