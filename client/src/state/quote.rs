//! Quote board state: current quote, loading flag, error banner, and the
//! transient "copied" confirmation.
//!
//! DESIGN
//! ======
//! One `QuoteState` lives in an `RwSignal` provided by the root component.
//! Async work (fetching, sharing, the flash timer) runs outside the state and
//! reports back through the methods below, each of which carries a ticket:
//!
//! - `fetch_seq` identifies the in-flight fetch. A new fetch is refused while
//!   one is running, and a completion with a stale ticket is dropped.
//! - `share_flash_seq` identifies the visible "copied" flash. Its expiry timer
//!   only clears the flash it was scheduled for, so a newer share or fetch
//!   supersedes older timers without having to cancel them.

#[cfg(test)]
#[path = "quote_test.rs"]
mod quote_test;

use crate::quotes::{FetchOutcome, Quote, QuoteOrigin};
use crate::util::share::ShareOutcome;

/// How long the "copied" confirmation stays visible.
pub const SHARE_FLASH_MS: u32 = 2_000;

/// The only user-visible error message.
pub const CLIPBOARD_ERROR: &str = "Failed to copy quote to clipboard";

/// Coarse view phase derived from the flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuotePhase {
    Idle,
    Loading,
    Displaying,
}

#[derive(Clone, Debug, Default)]
pub struct QuoteState {
    pub quote: Option<Quote>,
    pub origin: Option<QuoteOrigin>,
    pub loading: bool,
    pub error: Option<String>,
    pub share_success: bool,
    pub fetch_seq: u64,
    pub share_flash_seq: u64,
}

impl QuoteState {
    pub fn phase(&self) -> QuotePhase {
        if self.loading {
            QuotePhase::Loading
        } else if self.quote.is_some() {
            QuotePhase::Displaying
        } else {
            QuotePhase::Idle
        }
    }

    /// The quote card is hidden while a fetch is running.
    pub fn is_displaying(&self) -> bool {
        self.phase() == QuotePhase::Displaying
    }

    /// Enter the loading phase. Returns the fetch ticket, or `None` when a
    /// fetch is already in flight.
    pub fn begin_fetch(&mut self) -> Option<u64> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.share_success = false;
        self.share_flash_seq += 1;
        self.fetch_seq += 1;
        Some(self.fetch_seq)
    }

    /// Store a finished fetch. Returns `false` if `ticket` is stale.
    pub fn complete_fetch(&mut self, ticket: u64, outcome: FetchOutcome) -> bool {
        if !self.loading || ticket != self.fetch_seq {
            return false;
        }
        self.quote = Some(outcome.quote);
        self.origin = Some(outcome.origin);
        self.loading = false;
        true
    }

    /// Record a share attempt. Returns the flash ticket to expire after
    /// [`SHARE_FLASH_MS`] when the quote was copied.
    pub fn apply_share(&mut self, outcome: &ShareOutcome) -> Option<u64> {
        self.share_flash_seq += 1;
        match outcome {
            ShareOutcome::Shared => {
                self.error = None;
                self.share_success = false;
                None
            }
            ShareOutcome::Copied => {
                self.error = None;
                self.share_success = true;
                Some(self.share_flash_seq)
            }
            ShareOutcome::Failed(_) => {
                self.error = Some(CLIPBOARD_ERROR.to_owned());
                self.share_success = false;
                None
            }
        }
    }

    /// Hide the "copied" flash if `ticket` is still the current one.
    pub fn expire_share_flash(&mut self, ticket: u64) -> bool {
        if ticket != self.share_flash_seq || !self.share_success {
            return false;
        }
        self.share_success = false;
        true
    }
}
