//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `quote` owns the fetch/share lifecycle; `ui` holds presentation chrome.
//! Both are provided as `RwSignal`s from the root component.

pub mod quote;
pub mod ui;
