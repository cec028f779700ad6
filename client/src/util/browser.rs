//! `web-sys` implementations of the theme and share hooks, plus the
//! browser-seeded RNG. Compiled only for the hydrate build.

use futures::future::LocalBoxFuture;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::dark_mode::{StorageError, ThemeHost};
use super::share::{ShareError, ShareHost};

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| StorageError::Access(describe(&e)))?
        .ok_or(StorageError::Unavailable)
}

/// `localStorage` + `matchMedia` + `<html data-theme>`.
pub struct BrowserTheme;

impl ThemeHost for BrowserTheme {
    fn read_stored(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(describe(&e)))
    }

    fn write_stored(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(describe(&e)))
    }

    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }

    fn apply(&self, dark: bool) {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
        }
    }
}

/// `navigator.share` with `navigator.clipboard` as the fallback.
pub struct BrowserShare;

impl ShareHost for BrowserShare {
    fn can_share(&self) -> bool {
        web_sys::window().map_or(false, |w| {
            js_sys::Reflect::has(&w.navigator(), &JsValue::from_str("share")).unwrap_or(false)
        })
    }

    fn share<'a>(&'a self, title: &'a str, text: &'a str) -> LocalBoxFuture<'a, Result<(), ShareError>> {
        Box::pin(async move {
            let window = web_sys::window().ok_or(ShareError::Unsupported)?;
            let data = web_sys::ShareData::new();
            data.set_title(title);
            data.set_text(text);
            JsFuture::from(window.navigator().share_with_data(&data))
                .await
                .map(|_| ())
                .map_err(|e| ShareError::Rejected(describe(&e)))
        })
    }

    fn write_clipboard<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ShareError>> {
        Box::pin(async move {
            let window = web_sys::window().ok_or(ShareError::ClipboardUnavailable)?;
            let clipboard = window.navigator().clipboard().ok_or(ShareError::ClipboardUnavailable)?;
            JsFuture::from(clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(|e| ShareError::ClipboardWrite(describe(&e)))
        })
    }
}

/// A fresh `SmallRng` seeded from `Math.random`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64((js_sys::Math::random() * 9_007_199_254_740_992.0) as u64)
}
