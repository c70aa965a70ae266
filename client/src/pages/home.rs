//! Landing page with the search hero and popular categories.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use market::{Category, CategoryFilter};

use crate::net::types::ListingQuery;

/// Route for a search submitted from the hero box.
#[must_use]
pub fn search_href(term: &str) -> String {
    ListingQuery::new(term, CategoryFilter::All).listings_path()
}

/// Route for a category shortcut.
#[must_use]
pub fn category_href(category: Category) -> String {
    ListingQuery::new("", CategoryFilter::Only(category)).listings_path()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let term = RwSignal::new(String::new());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate(&search_href(&term.get()), NavigateOptions::default());
    };

    let categories = Category::ALL
        .into_iter()
        .filter(|c| c.has_hero())
        .map(|category| {
            view! {
                <a class="category-tile" href=category_href(category)>
                    <span class="category-tile__name">{category.as_str()}</span>
                    <span class="category-tile__tagline">{category.tagline()}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1 class="home-hero__title">"Find trusted help in your neighbourhood"</h1>
                <p class="home-hero__subtitle">"Book local professionals for repairs, cleaning, moving and more."</p>
                <form class="home-hero__search" on:submit=on_search>
                    <input
                        type="search"
                        placeholder="What do you need help with?"
                        prop:value=move || term.get()
                        on:input=move |ev| term.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Search"</button>
                </form>
            </section>
            <section class="home-categories">
                <h2>"Popular Categories"</h2>
                <div class="home-categories__grid">{categories}</div>
            </section>
        </div>
    }
}
