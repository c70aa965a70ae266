//! Card for one listing in the browse grid.
//!
//! DESIGN
//! ======
//! Every label is derived through `market::Listing` helpers so the grid,
//! the detail page, and the CLI format prices and ratings identically.

use leptos::prelude::*;

use crate::net::types::Listing;

/// A clickable card linking to the listing's detail page.
#[component]
pub fn ListingCard(listing: Listing) -> impl IntoView {
    let href = listing.detail_path();
    let price = listing.price_label();
    let rating = listing.provider.rating_label();
    let cover = listing.cover_image().map(str::to_owned);
    let Listing {
        title,
        category,
        description,
        provider,
        ..
    } = listing;
    let alt = title.clone();

    view! {
        <a class="listing-card" href=href>
            <div class="listing-card__media">
                {match cover {
                    Some(src) => view! { <img class="listing-card__image" src=src alt=alt /> }.into_any(),
                    None => view! { <div class="listing-card__placeholder">"No Image"</div> }.into_any(),
                }}
                <span class="listing-card__category">{category}</span>
            </div>
            <div class="listing-card__body">
                <div class="listing-card__heading">
                    <h3 class="listing-card__title">{title}</h3>
                    <span class="listing-card__rating">"★ " {rating}</span>
                </div>
                <p class="listing-card__description">{description}</p>
                <div class="listing-card__footer">
                    <span class="listing-card__provider">{provider.name}</span>
                    <span class="listing-card__price">{price}</span>
                </div>
            </div>
        </a>
    }
}
