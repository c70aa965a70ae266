//! Top navigation bar with section links and session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `SessionState` and `UiState` from context. Logout is the only write
//! path here: it clears the persisted session and returns home.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;
use crate::state::ui::{NAV_LINKS, UiState, is_active};
use crate::util::storage::browser_session_store;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let go_home = RwSignal::new(false);

    Effect::new(move || {
        if go_home.get() {
            go_home.set(false);
            navigate("/", NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        let mut store = browser_session_store();
        if let Some(Err(e)) = session.try_update(|s| s.sign_out(&mut store)) {
            #[cfg(feature = "hydrate")]
            log::warn!("logout could not clear storage: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
        }
        ui.update(UiState::close_menu);
        go_home.set(true);
    };
    let close_menu = move |_| ui.update(UiState::close_menu);

    let links = NAV_LINKS
        .iter()
        .map(|&(label, href)| {
            view! {
                <a
                    class="navbar__link"
                    class:navbar__link--active=move || pathname.with(|p| is_active(href, p))
                    href=href
                    on:click=close_menu
                >
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar" class:navbar--open=move || ui.with(|u| u.menu_open)>
            <a class="navbar__brand" href="/">
                <span class="navbar__logo">"N"</span>
                <span class="navbar__name">"NeighbourCare"</span>
            </a>
            <button
                class="navbar__toggle"
                aria-label="Toggle menu"
                on:click=move |_| ui.update(UiState::toggle_menu)
            >
                {move || if ui.with(|u| u.menu_open) { "✕" } else { "☰" }}
            </button>
            <div class="navbar__menu">
                <div class="navbar__links">{links}</div>
                <Show
                    when=move || session.with(SessionState::is_authenticated)
                    fallback=move || {
                        view! {
                            <div class="navbar__session">
                                <a class="navbar__link" href="/auth/login" on:click=close_menu>"Log in"</a>
                                <a class="btn btn--primary" href="/auth/signup" on:click=close_menu>"Sign up"</a>
                            </div>
                        }
                    }
                >
                    <div class="navbar__session">
                        <span class="navbar__greeting">
                            {move || session.with(|s| s.greeting().unwrap_or_default())}
                        </span>
                        <a class="btn" href="/dashboard" on:click=close_menu>"Dashboard"</a>
                        <button class="btn btn--ghost" title="Logout" on:click=on_logout>"Log out"</button>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
