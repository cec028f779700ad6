//! Share a quote through the native share sheet, falling back to the
//! clipboard.
//!
//! ERROR HANDLING
//! ==============
//! A missing or rejected share sheet (including the user cancelling it) is
//! logged and swallowed; the same text is copied instead. Only a clipboard
//! failure comes back as `ShareOutcome::Failed`.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use futures::future::LocalBoxFuture;

use crate::quotes::Quote;
use crate::quotes::model::SHARE_TITLE;
use crate::state::quote::{QuoteState, SHARE_FLASH_MS};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    #[error("share sheet unavailable")]
    Unsupported,
    #[error("share rejected: {0}")]
    Rejected(String),
    #[error("clipboard unavailable")]
    ClipboardUnavailable,
    #[error("clipboard write failed: {0}")]
    ClipboardWrite(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share sheet accepted the quote.
    Shared,
    /// The quote text is on the clipboard.
    Copied,
    /// Neither path worked.
    Failed(ShareError),
}

/// Platform capabilities used for sharing.
pub trait ShareHost {
    fn can_share(&self) -> bool;

    fn share<'a>(&'a self, title: &'a str, text: &'a str) -> LocalBoxFuture<'a, Result<(), ShareError>>;

    fn write_clipboard<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ShareError>>;
}

/// Share `quote`, copying it to the clipboard when the share sheet is
/// missing or fails.
pub async fn share_quote<H: ShareHost + ?Sized>(host: &H, quote: &Quote) -> ShareOutcome {
    let text = quote.share_text();

    if host.can_share() {
        match host.share(SHARE_TITLE, &text).await {
            Ok(()) => return ShareOutcome::Shared,
            Err(e) => log::debug!("share sheet failed, copying instead: {e}"),
        }
    }

    match host.write_clipboard(&text).await {
        Ok(()) => ShareOutcome::Copied,
        Err(e) => {
            log::warn!("clipboard copy failed: {e}");
            ShareOutcome::Failed(e)
        }
    }
}

/// Share `quote`, record the outcome through `update`, and expire the
/// "copied" flash once `sleep(SHARE_FLASH_MS)` resolves.
///
/// `update` applies a mutation to the shared [`QuoteState`]; the view layer
/// passes `RwSignal::update`, tests a `RefCell`. The expiry is ticketed, so
/// a share or fetch started during the sleep keeps its own flash state.
pub async fn share_with_flash<H, U, S, F>(host: &H, quote: &Quote, mut update: U, sleep: S) -> ShareOutcome
where
    H: ShareHost + ?Sized,
    U: FnMut(&mut dyn FnMut(&mut QuoteState)),
    S: FnOnce(u32) -> F,
    F: Future<Output = ()>,
{
    let outcome = share_quote(host, quote).await;

    let mut flash = None;
    update(&mut |s: &mut QuoteState| flash = s.apply_share(&outcome));

    if let Some(ticket) = flash {
        sleep(SHARE_FLASH_MS).await;
        update(&mut |s: &mut QuoteState| {
            s.expire_share_flash(ticket);
        });
    }
    outcome
}
