//! Loading indicator shown while a quote fetch is in flight.

use leptos::prelude::*;

/// Spinning ring; announced to assistive tech as a status.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading">
            <div class="spinner__ring"></div>
        </div>
    }
}
