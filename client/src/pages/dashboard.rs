//! Signed-in landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Booking success navigates here. Anonymous visitors are redirected to the
//! login page once the session has been restored.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// A shortcut card on the dashboard: title, blurb, link.
pub type SummaryCard = (&'static str, &'static str, &'static str);

/// Shortcut cards for a user of the given role.
#[must_use]
pub fn summary_cards(role: Role) -> [SummaryCard; 3] {
    match role {
        Role::User => [
            ("Find a Service", "Search trusted professionals near you.", "/listings"),
            ("Browse Categories", "Explore everything neighbours offer.", "/services"),
            ("Need Help?", "Questions about a booking? Get in touch.", "/contact"),
        ],
        Role::Provider => [
            ("Marketplace", "See how your listings appear to customers.", "/listings"),
            ("Categories", "Check which services are in demand.", "/services"),
            ("Support", "Questions about providing services? Get in touch.", "/contact"),
        ],
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Show
            when=move || session.with(SessionState::is_authenticated)
            fallback=|| view! { <div class="dashboard-page__loading">"Loading..."</div> }
        >
            {move || {
                session
                    .with(|s| s.user().cloned())
                    .map(|user| {
                        let cards = summary_cards(user.role)
                            .into_iter()
                            .map(|(title, blurb, href)| {
                                view! {
                                    <a class="dashboard-card" href=href>
                                        <h2 class="dashboard-card__title">{title}</h2>
                                        <p class="dashboard-card__blurb">{blurb}</p>
                                    </a>
                                }
                            })
                            .collect_view();
                        view! {
                            <div class="dashboard-page">
                                <h1>"Dashboard"</h1>
                                <p class="dashboard-page__welcome">{format!("Welcome back, {}", user.name)}</p>
                                <p class="dashboard-page__role">{format!("Role: {}", user.role.as_str())}</p>
                                <div class="dashboard-page__cards">{cards}</div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
