//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{quote::QuoteState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the quote and UI state contexts and resolves the startup theme
/// once the app is live in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let quote = RwSignal::new(QuoteState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(quote);
    provide_context(ui);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let dark = crate::util::dark_mode::init(&crate::util::browser::BrowserTheme);
            ui.update(|u| u.dark_mode = dark);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/quoteboard.css"/>
        <Title text="Random Quote Generator"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
