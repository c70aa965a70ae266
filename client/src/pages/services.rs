//! Services overview: one card per headline category.

use leptos::prelude::*;
use market::Category;

use crate::pages::home::category_href;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let cards = Category::ALL
        .into_iter()
        .filter(|c| c.has_hero())
        .map(|category| {
            view! {
                <article class="service-card">
                    <h2 class="service-card__title">{category.as_str()}</h2>
                    <p class="service-card__description">{category.tagline()}</p>
                    <a class="btn btn--primary" href=category_href(category)>
                        {format!("View {category} Services")}
                    </a>
                </article>
            }
        })
        .collect_view();

    view! {
        <div class="services-page">
            <h1>"Our Services"</h1>
            <div class="services-page__grid">{cards}</div>
        </div>
    }
}
