//! Five-star provider rating display.

use leptos::prelude::*;

/// Five stars, the first `filled` of them lit.
#[component]
pub fn StarRating(filled: usize, #[prop(optional)] label: Option<String>) -> impl IntoView {
    let stars = (0..5)
        .map(|i| {
            view! { <span class="star" class:star--filled=(i < filled) aria-hidden="true">"★"</span> }
        })
        .collect_view();

    view! {
        <span class="star-rating" title=format!("{filled} of 5 stars")>
            {stars}
            {label.map(|text| view! { <span class="star-rating__label">{text}</span> })}
        </span>
    }
}
