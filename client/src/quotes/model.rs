//! Quote value type and the fetch error taxonomy.
//!
//! DESIGN
//! ======
//! A `Quote` can only be built through `Quote::new`, which rejects empty
//! fields. Every source funnels its decoded payload through that constructor,
//! so "missing content or author" is one error variant regardless of which
//! response shape produced it.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// Title passed to the native share sheet.
pub const SHARE_TITLE: &str = "Random Quote";

/// A quote with non-empty content and author.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    content: String,
    author: String,
}

impl Quote {
    /// Build a quote, rejecting empty content or author.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Incomplete`] when either field is empty.
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Result<Self, FetchError> {
        let content = content.into();
        let author = author.into();
        if content.is_empty() || author.is_empty() {
            return Err(FetchError::Incomplete);
        }
        Ok(Self { content, author })
    }

    /// Built-in quotes are compile-time constants with non-empty fields.
    pub(crate) fn builtin(content: &'static str, author: &'static str) -> Self {
        debug_assert!(!content.is_empty() && !author.is_empty());
        Self { content: content.to_owned(), author: author.to_owned() }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Text used for both the share sheet and the clipboard copy.
    pub fn share_text(&self) -> String {
        format!("\"{}\" — {}", self.content, self.author)
    }
}

/// Why a single source attempt failed.
///
/// Every variant is recoverable: the fetcher logs it and moves on to the next
/// source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The source answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body was not the JSON shape this source promises.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// Content or author was missing or empty.
    #[error("invalid quote data received")]
    Incomplete,

    /// A list-shaped source returned no entries.
    #[error("source returned no quotes")]
    Empty,

    /// The source did not answer within its time budget.
    #[error("timed out after {0} ms")]
    Timeout(u32),

    /// HTTP is only wired up in the browser build.
    #[error("source unavailable outside the browser")]
    Unavailable,
}
