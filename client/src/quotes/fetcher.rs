//! Ordered fetch across quote sources with a built-in fallback.
//!
//! DESIGN
//! ======
//! Sources are tried strictly one after another: source `k + 1` is only
//! polled after source `k` has failed. The first well-formed quote wins and
//! later sources are never touched. Exhausting the chain is not an error; the
//! outcome then carries a built-in quote and `QuoteOrigin::Fallback`.

#[cfg(test)]
#[path = "fetcher_test.rs"]
mod fetcher_test;

use rand::RngCore;

use super::fallback::pick_fallback;
use super::model::Quote;
use super::sources::{QuoteSource, SourceConfig};

/// Where the current quote came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuoteOrigin {
    /// A live source, by label.
    Source(String),
    /// The built-in list.
    Fallback,
}

impl QuoteOrigin {
    /// Footer text for the rendered card.
    pub fn describe(&self) -> String {
        match self {
            Self::Source(label) => format!("via {label}"),
            Self::Fallback => "offline pick".to_owned(),
        }
    }
}

/// Result of one `fetch_random_quote` run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOutcome {
    pub quote: Quote,
    pub origin: QuoteOrigin,
}

/// Walks a fixed list of sources in priority order.
pub struct QuoteFetcher {
    sources: Vec<Box<dyn QuoteSource>>,
}

impl QuoteFetcher {
    pub fn new(sources: Vec<Box<dyn QuoteSource>>) -> Self {
        Self { sources }
    }

    /// The production chain built from [`SourceConfig::default`].
    pub fn with_defaults() -> Self {
        Self::new(SourceConfig::default().sources())
    }

    pub fn labels(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.label()).collect()
    }

    /// Fetch one quote, falling back to the built-in list when every source
    /// fails. Never returns an error.
    pub async fn fetch_random_quote(&self, rng: &mut dyn RngCore) -> FetchOutcome {
        for source in &self.sources {
            match source.fetch(&mut *rng).await {
                Ok(quote) => {
                    log::debug!("quote source '{}' succeeded", source.label());
                    return FetchOutcome {
                        quote,
                        origin: QuoteOrigin::Source(source.label().to_owned()),
                    };
                }
                Err(e) => log::warn!("quote source '{}' failed, trying next: {e}", source.label()),
            }
        }

        log::warn!("all quote sources failed; using a built-in quote");
        FetchOutcome {
            quote: pick_fallback(rng),
            origin: QuoteOrigin::Fallback,
        }
    }
}
