//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the quote and UI state from Leptos context
//! providers set up in `app`.

pub mod notice;
pub mod quote_card;
pub mod spinner;
pub mod theme_toggle;
