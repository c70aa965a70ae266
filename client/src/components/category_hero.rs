//! Themed banner shown above the listings grid for headline categories.

use leptos::prelude::*;
use market::Category;

#[component]
pub fn CategoryHero(category: Category) -> impl IntoView {
    let theme = format!("category-hero--{}", category.as_str().to_ascii_lowercase().replace(' ', "-"));

    view! {
        <section class=format!("category-hero {theme}")>
            <p class="category-hero__eyebrow">"Premium Services"</p>
            <h1 class="category-hero__title">{category.as_str()}</h1>
            <p class="category-hero__tagline">{category.tagline()}</p>
        </section>
    }
}
