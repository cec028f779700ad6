//! Card rendering the current quote with its share button.

use leptos::prelude::*;

use crate::state::quote::QuoteState;

/// Quote card. Only rendered while a quote is displayed.
#[component]
pub fn QuoteCard() -> impl IntoView {
    let state = expect_context::<RwSignal<QuoteState>>();

    let content = move || state.get().quote.map(|q| q.content().to_owned()).unwrap_or_default();
    let author = move || state.get().quote.map(|q| q.author().to_owned()).unwrap_or_default();
    let origin = move || state.get().origin.map(|o| o.describe()).unwrap_or_default();

    let on_share = move |_| share_current(state);

    view! {
        <article class="quote-card">
            <button
                class="btn quote-card__share"
                on:click=on_share
                aria-label="Share quote"
                title="Share quote"
            >
                "⤴"
            </button>
            <span class="quote-card__mark" aria-hidden="true">"“"</span>
            <p class="quote-card__content">"\"" {content} "\""</p>
            <p class="quote-card__author">"— " {author}</p>
            <p class="quote-card__origin">{origin}</p>
        </article>
    }
}

/// Share the current quote and drive the "copied" flash.
fn share_current(state: RwSignal<QuoteState>) {
    let Some(quote) = state.get_untracked().quote else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::browser::BrowserShare;
        use crate::util::share::share_with_flash;

        share_with_flash(
            &BrowserShare,
            &quote,
            |apply| state.update(|s| apply(s)),
            gloo_timers::future::TimeoutFuture::new,
        )
        .await;
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = quote;
}
