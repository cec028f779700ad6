//! Quote domain: the value type, the built-in fallback set, the live HTTP
//! sources, and the ordered fetch that ties them together.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fetcher` walks `sources` in priority order and short-circuits on the
//! first well-formed `Quote`. When every source fails it degrades to a quote
//! from `fallback`, so callers never see a fetch error.

pub mod fallback;
pub mod fetcher;
pub mod model;
pub mod sources;

pub use fetcher::{FetchOutcome, QuoteFetcher, QuoteOrigin};
pub use model::{FetchError, Quote};
pub use sources::{FnSource, HttpSource, QuoteSource, ResponseShape, SourceConfig};
