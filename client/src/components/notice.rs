//! Inline banners for the clipboard error and the "copied" confirmation.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "notice notice--error",
            Self::Success => "notice notice--success",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Error => "!",
            Self::Success => "✓",
        }
    }
}

/// A single-line banner with an icon.
#[component]
pub fn Notice(kind: NoticeKind, #[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div class=kind.class() role="status">
            <span class="notice__icon" aria-hidden="true">{kind.icon()}</span>
            <p class="notice__text">{move || message.get()}</p>
        </div>
    }
}
