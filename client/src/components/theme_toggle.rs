//! Floating light/dark toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Button that flips the theme and persists the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let current = ui.get_untracked().dark_mode;
            let next = crate::util::dark_mode::toggle(&crate::util::browser::BrowserTheme, current);
            ui.update(|u| u.dark_mode = next);
        }
    };

    view! {
        <button
            class="btn theme-toggle"
            on:click=on_toggle
            aria-label="Toggle dark mode"
            title="Toggle dark mode"
        >
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}
