//! Live quote sources and their response shapes.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! a `gloo-timers` timeout.
//! Server-side (SSR) and native tests: `HttpSource::fetch` reports
//! `FetchError::Unavailable`; decoding is shared and testable everywhere.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, malformed JSON, and empty fields all
//! surface as `FetchError` so the fetcher can treat them uniformly as
//! "try the next source".

#[cfg(test)]
#[path = "sources_test.rs"]
mod sources_test;

use futures::future::LocalBoxFuture;
use rand::{Rng, RngCore};
use serde::Deserialize;

use super::model::{FetchError, Quote};

/// Same-origin path forwarded to the quotable API by the server.
pub const QUOTABLE_PROXY_URL: &str = "/api/quotable/random";
/// Public CORS proxy used when the same-origin path is unavailable.
pub const CORS_PROXY_URL: &str = "https://api.allorigins.win/raw?url=";
/// Upstream random-quote endpoint reached through the CORS proxy.
pub const QUOTABLE_UPSTREAM_URL: &str = "https://api.quotable.io/random";
/// List-shaped quote API with CORS enabled.
pub const TYPE_FIT_URL: &str = "https://type.fit/api/quotes";
/// Per-source time budget before the attempt counts as failed.
pub const DEFAULT_SOURCE_TIMEOUT_MS: u32 = 8_000;
/// Author used when a list entry carries none.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// One step in the fallback chain.
///
/// Implementors perform a single attempt with no internal retry.
pub trait QuoteSource {
    /// Short name used in logs and the status footer.
    fn label(&self) -> &str;

    /// Attempt to produce one quote. `rng` is available for sources that
    /// return several candidates.
    fn fetch<'a>(&'a self, rng: &'a mut dyn RngCore) -> LocalBoxFuture<'a, Result<Quote, FetchError>>;
}

/// JSON layout a source responds with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseShape {
    /// A single `{ "content": ..., "author": ... }` object.
    Quotable,
    /// An array of `{ "text": ..., "author"?: ... }` objects.
    TypeFit,
}

#[derive(Debug, Deserialize)]
struct QuotableBody {
    #[serde(default)]
    content: String,
    #[serde(default)]
    author: String,
}

#[derive(Debug, Deserialize)]
struct TypeFitEntry {
    #[serde(default)]
    text: String,
    #[serde(default)]
    author: Option<String>,
}

/// Decode a single-object `{content, author}` body.
///
/// # Errors
///
/// Returns `Parse` for malformed JSON and `Incomplete` for empty fields.
pub fn parse_quotable(body: &str) -> Result<Quote, FetchError> {
    let parsed: QuotableBody = serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    Quote::new(parsed.content, parsed.author)
}

/// Decode a list body and pick one entry uniformly at random.
///
/// Only the picked entry is decoded, so malformed siblings are ignored.
/// A missing or empty author becomes [`UNKNOWN_AUTHOR`].
///
/// # Errors
///
/// Returns `Parse` when the body is not a JSON array, `Empty` for an empty
/// list, and `Incomplete` when the picked entry is malformed or has no text.
pub fn parse_type_fit<R: Rng + ?Sized>(body: &str, rng: &mut R) -> Result<Quote, FetchError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    if entries.is_empty() {
        return Err(FetchError::Empty);
    }
    let picked = &entries[rng.random_range(0..entries.len())];
    let entry = TypeFitEntry::deserialize(picked).map_err(|e| {
        log::debug!("picked type.fit entry is malformed: {e}");
        FetchError::Incomplete
    })?;
    let author = entry
        .author
        .as_deref()
        .filter(|a| !a.is_empty())
        .unwrap_or(UNKNOWN_AUTHOR);
    Quote::new(entry.text, author)
}

/// A GET endpoint decoded with a fixed [`ResponseShape`].
#[derive(Clone, Debug)]
pub struct HttpSource {
    label: String,
    url: String,
    shape: ResponseShape,
    timeout_ms: u32,
}

impl HttpSource {
    pub fn new(label: impl Into<String>, url: impl Into<String>, shape: ResponseShape) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            shape,
            timeout_ms: DEFAULT_SOURCE_TIMEOUT_MS,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn shape(&self) -> ResponseShape {
        self.shape
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Decode a response body according to this source's shape.
    ///
    /// # Errors
    ///
    /// See [`parse_quotable`] and [`parse_type_fit`].
    pub fn decode<R: Rng + ?Sized>(&self, body: &str, rng: &mut R) -> Result<Quote, FetchError> {
        match self.shape {
            ResponseShape::Quotable => parse_quotable(body),
            ResponseShape::TypeFit => parse_type_fit(body, rng),
        }
    }
}

impl QuoteSource for HttpSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn fetch<'a>(&'a self, rng: &'a mut dyn RngCore) -> LocalBoxFuture<'a, Result<Quote, FetchError>> {
        Box::pin(async move {
            #[cfg(feature = "hydrate")]
            {
                let body = get_text(&self.url, self.timeout_ms).await?;
                self.decode(&body, rng)
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = rng;
                Err(FetchError::Unavailable)
            }
        })
    }
}

/// A labelled closure acting as a source, for chains assembled in code.
pub struct FnSource<F> {
    label: String,
    f: F,
}

impl<F> FnSource<F>
where
    F: for<'a> Fn(&'a mut dyn RngCore) -> LocalBoxFuture<'a, Result<Quote, FetchError>>,
{
    pub fn new(label: impl Into<String>, f: F) -> Self {
        Self { label: label.into(), f }
    }
}

impl<F> QuoteSource for FnSource<F>
where
    F: for<'a> Fn(&'a mut dyn RngCore) -> LocalBoxFuture<'a, Result<Quote, FetchError>>,
{
    fn label(&self) -> &str {
        &self.label
    }

    fn fetch<'a>(&'a self, rng: &'a mut dyn RngCore) -> LocalBoxFuture<'a, Result<Quote, FetchError>> {
        (self.f)(rng)
    }
}

/// GET `url` and return the body text, failing on non-2xx or timeout.
#[cfg(feature = "hydrate")]
async fn get_text(url: &str, timeout_ms: u32) -> Result<String, FetchError> {
    use futures::future::{Either, select};

    let request = Box::pin(async {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))
    });
    let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_ms));

    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FetchError::Timeout(timeout_ms)),
    }
}

/// Endpoints and time budget for the default chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    pub proxy_url: String,
    pub cors_proxy_url: String,
    pub upstream_url: String,
    pub type_fit_url: String,
    pub timeout_ms: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            proxy_url: QUOTABLE_PROXY_URL.to_owned(),
            cors_proxy_url: CORS_PROXY_URL.to_owned(),
            upstream_url: QUOTABLE_UPSTREAM_URL.to_owned(),
            type_fit_url: TYPE_FIT_URL.to_owned(),
            timeout_ms: DEFAULT_SOURCE_TIMEOUT_MS,
        }
    }
}

impl SourceConfig {
    /// URL for the CORS-proxied source: the proxy prefix followed by the
    /// percent-encoded upstream URL.
    pub fn cors_proxied_url(&self) -> String {
        format!("{}{}", self.cors_proxy_url, urlencoding::encode(&self.upstream_url))
    }

    /// The default HTTP sources in priority order: same-origin proxy, CORS
    /// proxy, then the list-shaped API.
    pub fn http_sources(&self) -> Vec<HttpSource> {
        vec![
            HttpSource::new("quotable", &self.proxy_url, ResponseShape::Quotable),
            HttpSource::new("quotable-cors", self.cors_proxied_url(), ResponseShape::Quotable),
            HttpSource::new("type.fit", &self.type_fit_url, ResponseShape::TypeFit),
        ]
        .into_iter()
        .map(|source| source.with_timeout(self.timeout_ms))
        .collect()
    }

    /// [`Self::http_sources`] boxed for the fetcher.
    pub fn sources(&self) -> Vec<Box<dyn QuoteSource>> {
        self.http_sources()
            .into_iter()
            .map(|source| Box::new(source) as Box<dyn QuoteSource>)
            .collect()
    }
}
