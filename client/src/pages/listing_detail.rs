//! Listing detail page with the booking flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `GET /listings/{id}` on mount and whenever the route id changes.
//! Any failure renders "Listing not found". "Book Now" opens the booking
//! dialog for signed-in users and sends anonymous users to the login page,
//! since the API rejects anonymous bookings.
//!
//! ERROR HANDLING
//! ==============
//! Validation errors never leave the dialog. A rejected or failed submission
//! shows one message and keeps the draft; nothing is retried automatically.

#[cfg(test)]
#[path = "listing_detail_test.rs"]
mod listing_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::booking_dialog::BookingDialog;
use crate::components::star_rating::StarRating;
use crate::net::types::ApiError;
use crate::state::booking::BookingState;
use crate::state::listing_detail::{DetailView, ListingDetailState};
use crate::state::session::SessionState;
use crate::util::auth::LOGIN_PATH;

const BOOKING_FAILED: &str = "Failed to create booking. Please try again.";

/// What "Book Now" does for the current visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookNow {
    OpenDialog,
    SignIn,
}

#[must_use]
pub fn book_now_action(authenticated: bool) -> BookNow {
    if authenticated { BookNow::OpenDialog } else { BookNow::SignIn }
}

/// Message shown in the dialog when `POST /bookings` fails. The server's own
/// message wins when it sent one.
#[must_use]
pub fn booking_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => BOOKING_FAILED.to_owned(),
    }
}

#[component]
pub fn ListingDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let detail = RwSignal::new(ListingDetailState::default());
    let booking = RwSignal::new(BookingState::default());
    let redirect_to = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if let Some(path) = redirect_to.get() {
            redirect_to.set(None);
            navigate(path, NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use leptos_router::hooks::use_params_map;

        let params = use_params_map();
        let alive = Arc::new(AtomicBool::new(true));
        let alive_fetch = alive.clone();
        Effect::new(move || {
            let id = params.with(|p| p.get("id")).unwrap_or_default();
            booking.update(BookingState::cancel);
            let Some(ticket) = detail.try_update(ListingDetailState::begin_fetch) else {
                return;
            };
            let token = session.with_untracked(|s| s.token().map(str::to_owned));
            let alive = alive_fetch.clone();
            leptos::task::spawn_local(async move {
                let result = if id.is_empty() {
                    Err(ApiError::NotFound)
                } else {
                    crate::net::api::fetch_listing(&id, token.as_deref()).await
                };
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                if let Err(e) = &result {
                    log::warn!("listing {id} fetch failed: {e}");
                }
                detail.update(|d| {
                    d.apply(ticket, result);
                });
            });
        });
        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            let _ = detail.try_update(ListingDetailState::abandon);
            let _ = booking.try_update(BookingState::cancel);
        });
    }

    let on_book_now = move |_| match book_now_action(session.with_untracked(SessionState::is_authenticated)) {
        BookNow::OpenDialog => booking.update(BookingState::open),
        BookNow::SignIn => redirect_to.set(Some(LOGIN_PATH)),
    };

    let on_confirm = Callback::new(move |()| {
        let Some(listing_id) = detail.with_untracked(|d| d.listing().map(|l| l.id.clone())) else {
            return;
        };
        let zone = crate::util::clock::BrowserZone;
        let Some(Ok((ticket, request))) = booking.try_update(|b| b.begin_submit(&listing_id, &zone)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use crate::state::booking::SubmitOutcome;

            let token = session.with_untracked(|s| s.token().map(str::to_owned));
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_booking(&request, token.as_deref())
                    .await
                    .map(|confirmation| {
                        log::info!("booking created: {:?}", confirmation.id);
                    })
                    .map_err(|e| {
                        log::warn!("booking for {listing_id} failed: {e}");
                        booking_failure_message(&e)
                    });
                if booking.try_update(|b| b.finish_submit(ticket, result)) == Some(SubmitOutcome::Booked) {
                    redirect_to.set(Some("/dashboard"));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, request);
    });

    view! {
        <div class="listing-detail">
            {move || match detail.with(|d| d.view.clone()) {
                DetailView::Loading => view! { <div class="listing-detail__loading">"Loading..."</div> }.into_any(),
                DetailView::NotFound => {
                    view! { <div class="listing-detail__missing">"Listing not found"</div> }.into_any()
                }
                DetailView::Loaded(listing) => {
                    let price = listing.price_label();
                    let filled = listing.provider.filled_stars();
                    let rating = listing.provider.rating_label();
                    let cover = listing.cover_image().map(str::to_owned);
                    let alt = listing.title.clone();
                    let slots = if listing.availability.is_empty() {
                        view! { <li class="listing-detail__slot">"Contact the provider for availability"</li> }
                            .into_any()
                    } else {
                        listing
                            .availability
                            .iter()
                            .map(|slot| view! { <li class="listing-detail__slot">{slot.clone()}</li> })
                            .collect_view()
                            .into_any()
                    };
                    view! {
                        <div class="listing-detail__media">
                            {match cover {
                                Some(src) => view! { <img class="listing-detail__image" src=src alt=alt /> }.into_any(),
                                None => view! { <div class="listing-detail__placeholder">"No Image"</div> }.into_any(),
                            }}
                        </div>
                        <div class="listing-detail__info">
                            <span class="listing-detail__category">{listing.category}</span>
                            <h1 class="listing-detail__title">{listing.title}</h1>
                            <p class="listing-detail__price">{price}</p>
                            <StarRating filled=filled label=rating />
                            <p class="listing-detail__description">{listing.description}</p>
                            <div class="listing-detail__provider">
                                <span class="listing-detail__provider-label">"Provided by"</span>
                                <span class="listing-detail__provider-name">{listing.provider.name}</span>
                            </div>
                            <button class="btn btn--primary listing-detail__book" on:click=on_book_now>
                                "Book Now"
                            </button>
                            <h2 class="listing-detail__slots-title">"Availability"</h2>
                            <ul class="listing-detail__slots">{slots}</ul>
                        </div>
                    }
                        .into_any()
                }
            }}
            <Show when=move || booking.with(BookingState::is_open)>
                <BookingDialog booking=booking on_confirm=on_confirm />
            </Show>
        </div>
    }
}
