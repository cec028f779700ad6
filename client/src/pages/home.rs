//! The quote board: fetch button, banners, and the current quote.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the fetch orchestration. The button is disabled while loading and
//! `QuoteState::begin_fetch` refuses overlapping requests, so at most one
//! fetch is ever in flight.

use leptos::prelude::*;

use crate::components::notice::{Notice, NoticeKind};
use crate::components::quote_card::QuoteCard;
use crate::components::spinner::LoadingSpinner;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::quote::QuoteState;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<QuoteState>>();

    let loading = move || state.get().loading;
    let error = move || state.get().error;
    let copied = move || state.get().share_success;

    view! {
        <main class="board">
            <ThemeToggle/>

            <h1 class="board__title">"Random Quote Generator"</h1>

            <div class="board__body">
                <div class="board__actions">
                    <button
                        class="btn btn--primary board__fetch"
                        on:click=move |_| request_quote(state)
                        disabled=loading
                    >
                        {move || if loading() { "Fetching..." } else { "Get Random Quote" }}
                    </button>
                </div>

                <Show when=loading>
                    <LoadingSpinner/>
                </Show>

                <Show when=move || error().is_some()>
                    <Notice
                        kind=NoticeKind::Error
                        message=Signal::derive(move || error().unwrap_or_default())
                    />
                </Show>

                <Show when=copied>
                    <Notice kind=NoticeKind::Success message={"Quote copied to clipboard!".to_owned()}/>
                </Show>

                <Show when=move || state.get().is_displaying()>
                    <QuoteCard/>
                </Show>
            </div>
        </main>
    }
}

/// Start a fetch unless one is already running.
fn request_quote(state: RwSignal<QuoteState>) {
    let mut ticket = None;
    state.update(|s| ticket = s.begin_fetch());
    let Some(ticket) = ticket else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let fetcher = crate::quotes::QuoteFetcher::with_defaults();
        let mut rng = crate::util::browser::seeded_rng();
        let outcome = fetcher.fetch_random_quote(&mut rng).await;
        state.update(|s| {
            if !s.complete_fetch(ticket, outcome) {
                log::debug!("dropped stale quote for fetch #{ticket}");
            }
        });
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = ticket;
}
