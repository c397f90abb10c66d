//! Root application component with routing and the store context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{how_to::HowToPage, splash::SplashPage, wish_add::WishAddPage, wish_list::WishListPage};
use crate::state::wishes::WishStore;

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
/// Provides the wish store and sets up client-side routing. Unknown paths
/// fall back to the splash screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = RwSignal::new(WishStore::browser());
    provide_context(store);

    // Read localStorage only after hydration so the first client render
    // matches the server render.
    Effect::new(move || {
        store.update(|s| {
            s.ensure_loaded();
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/wishes.css"/>
        <Title text="Wishes"/>

        <Router>
            <Routes fallback=SplashPage>
                <Route path=StaticSegment("") view=SplashPage/>
                <Route path=(StaticSegment("home"), StaticSegment("howTo")) view=HowToPage/>
                <Route path=(StaticSegment("home"), StaticSegment("main")) view=WishListPage/>
                <Route path=(StaticSegment("wish"), StaticSegment("add")) view=WishAddPage/>
            </Routes>
        </Router>
    }
}
