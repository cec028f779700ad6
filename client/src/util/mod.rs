//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dark_mode` and `share` hold the platform-independent logic behind small
//! host traits; `browser` supplies the `web-sys` implementations for the
//! hydrate build so the logic stays testable natively.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod dark_mode;
pub mod share;
