//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    about::AboutPage, contact::ContactPage, dashboard::DashboardPage, home::HomePage, listing_detail::ListingDetailPage,
    listings::ListingsPage, login::LoginPage, services::ServicesPage, signup::SignupPage,
};
use crate::state::{session::SessionState, ui::UiState};
use crate::util::storage::browser_session_store;

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
/// Provides the session and UI contexts and sets up client-side routing.
/// The session starts out pending and is restored from `localStorage` once
/// the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::pending());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);

    Effect::new(move || {
        session.set(SessionState::restore(&browser_session_store()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/neighbourcare.css"/>
        <Title text="NeighbourCare"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("listings") view=ListingsPage/>
                    <Route path=(StaticSegment("listings"), ParamSegment("id")) view=ListingDetailPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignupPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
