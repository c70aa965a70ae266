//! Listing browser with free-text and category filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filters are initialised from the `q` and `category` query parameters and
//! written back to the URL (replace, not push) whenever they change, so links
//! from the home and services pages land on a pre-filtered grid.
//!
//! DESIGN
//! ======
//! Every filter change refetches. Each fetch takes a ticket from
//! `ListingsState`; a response only lands if its ticket is still the latest,
//! so a slow response for an older filter never overwrites a newer one. An
//! alive flag cleared on unmount drops responses for a page that is gone.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use market::{Category, CategoryFilter};

use crate::components::category_hero::CategoryHero;
use crate::components::listing_card::ListingCard;
use crate::net::types::ListingQuery;
use crate::state::listings::ListingsState;

#[component]
pub fn ListingsPage() -> impl IntoView {
    let params = use_query_map();
    let navigate = use_navigate();
    let listings = RwSignal::new(ListingsState::default());
    let query = RwSignal::new(params.with_untracked(|p| ListingQuery::from_params(p.get_str("q"), p.get_str("category"))));

    // Back/forward navigation changes the URL without touching the inputs.
    // Compare encoded pairs so trailing spaces still being typed survive.
    Effect::new(move || {
        let next = params.with(|p| ListingQuery::from_params(p.get_str("q"), p.get_str("category")));
        if query.with_untracked(|q| q.to_pairs() != next.to_pairs()) {
            query.set(next);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::state::session::SessionState;

        let session = expect_context::<RwSignal<SessionState>>();
        let alive = Arc::new(AtomicBool::new(true));
        let alive_fetch = alive.clone();
        Effect::new(move || {
            let current = query.get();
            let Some(ticket) = listings.try_update(|s| s.begin_fetch(current.clone())) else {
                return;
            };
            let token = session.with_untracked(|s| s.token().map(str::to_owned));
            let alive = alive_fetch.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_listings(&current, token.as_deref()).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                if let Err(e) = &result {
                    log::warn!("listings fetch failed: {e}");
                }
                listings.update(|s| {
                    s.apply(ticket, result);
                });
            });
        });
        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            let _ = listings.try_update(ListingsState::abandon);
        });
    }

    let apply_filters = move |next: ListingQuery| {
        if query.with_untracked(|q| *q == next) {
            return;
        }
        navigate(
            &next.listings_path(),
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
        query.set(next);
    };
    let apply_term = apply_filters.clone();
    let on_term_input = move |ev: leptos::ev::Event| {
        let next = ListingQuery::new(event_target_value(&ev), query.with_untracked(|q| q.category));
        apply_term(next);
    };
    let on_category_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let next = ListingQuery::new(query.with_untracked(|q| q.q.clone()), CategoryFilter::from_param(Some(raw.as_str())));
        apply_filters(next);
    };

    let category_options = Category::ALL
        .into_iter()
        .map(|category| {
            view! {
                <option
                    value=category.as_str()
                    selected=move || query.with(|q| q.category == CategoryFilter::Only(category))
                >
                    {category.as_str()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="listings-page">
            {move || listings.with(ListingsState::hero_category).map(|category| view! { <CategoryHero category=category /> })}
            <div class="listings-page__filters">
                <input
                    class="listings-page__search"
                    type="search"
                    placeholder="Search services..."
                    prop:value=move || query.with(|q| q.q.clone())
                    on:input=on_term_input
                />
                <select class="listings-page__category" on:change=on_category_change>
                    <option value="" selected=move || query.with(|q| q.category == CategoryFilter::All)>
                        "All Categories"
                    </option>
                    {category_options}
                </select>
            </div>
            <Show when=move || listings.with(|s| s.error.is_some())>
                <p class="listings-page__error">{move || listings.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !listings.with(|s| s.loading && s.items.is_empty())
                fallback=|| view! { <div class="listings-page__loading">"Loading..."</div> }
            >
                <Show
                    when=move || listings.with(|s| !s.items.is_empty())
                    fallback=|| view! { <p class="listings-page__empty">"No services found."</p> }
                >
                    <div class="listings-page__grid">
                        <For
                            each=move || listings.with(|s| s.items.clone())
                            key=|listing| listing.id.clone()
                            children=|listing| view! { <ListingCard listing=listing /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
