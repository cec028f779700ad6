//! Same-origin proxy for the Quotable API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser's first quote source is `/api/quotable/random`. Routing it
//! through this server avoids CORS and TLS-certificate problems with the
//! public upstream. The response status, body and content type are passed
//! through unchanged; only transport failures are translated.
//!
//! ERROR HANDLING
//! ==============
//! An upstream timeout maps to `504`, any other transport failure to `502`.
//! Both carry a small JSON body so the client can log something useful.

#[cfg(test)]
#[path = "quotes_test.rs"]
mod quotes_test;

use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream timed out")]
    Timeout,
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Join the upstream base, the captured tail path and the raw query string.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

/// `GET /api/quotable/{*path}`
pub async fn proxy_quotable(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.quotable_upstream, &path, query.as_deref());

    let upstream = state.http.get(&url).send().await.map_err(|e| {
        let err = ProxyError::from_reqwest(&e);
        tracing::warn!(%url, error = %err, "quotable proxy request failed");
        err
    })?;

    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| HeaderValue::from_str(v).ok());

    let body = upstream.bytes().await.map_err(|e| {
        let err = ProxyError::from_reqwest(&e);
        tracing::warn!(%url, error = %err, "quotable proxy body read failed");
        err
    })?;

    tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "quotable proxy response");

    let mut response = (status, body).into_response();
    if let Some(ct) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, ct);
    }
    Ok(response)
}
