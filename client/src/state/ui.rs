//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (theme) out of the quote lifecycle state so
//! the toggle can re-render without touching fetch bookkeeping.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
