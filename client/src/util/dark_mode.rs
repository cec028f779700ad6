//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from durable storage and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! storage and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort: storage may be missing or throw
//! (private browsing, sandboxed frames). Failures are logged and the OS
//! color-scheme preference stands in for the stored value.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const STORAGE_KEY: &str = "darkMode";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Platform hooks the theme controller needs.
pub trait ThemeHost {
    fn read_stored(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write_stored(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn prefers_dark(&self) -> bool;
    fn apply(&self, dark: bool);
}

/// Read the dark mode preference.
///
/// A non-empty stored value wins (`"true"` is dark, anything else light).
/// Otherwise, or when storage fails, the system preference decides.
pub fn read_preference<H: ThemeHost + ?Sized>(host: &H) -> bool {
    match host.read_stored(STORAGE_KEY) {
        Ok(Some(value)) if !value.is_empty() => value == "true",
        Ok(_) => host.prefers_dark(),
        Err(e) => {
            log::debug!("theme preference unreadable, using system setting: {e}");
            host.prefers_dark()
        }
    }
}

/// Resolve the startup theme and apply it.
pub fn init<H: ThemeHost + ?Sized>(host: &H) -> bool {
    let dark = read_preference(host);
    host.apply(dark);
    dark
}

/// Toggle dark mode and persist the new preference.
pub fn toggle<H: ThemeHost + ?Sized>(host: &H, current: bool) -> bool {
    let next = !current;
    if let Err(e) = host.write_stored(STORAGE_KEY, if next { "true" } else { "false" }) {
        log::debug!("theme preference not saved: {e}");
    }
    host.apply(next);
    next
}
