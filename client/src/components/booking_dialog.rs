//! Modal collecting the date, time, and duration for a booking.
//!
//! DESIGN
//! ======
//! The dialog only edits `BookingState`; the owning page performs the
//! network call in `on_confirm` so the dialog stays free of async work.

use leptos::prelude::*;

use crate::state::booking::BookingState;

#[component]
pub fn BookingDialog(booking: RwSignal<BookingState>, on_confirm: Callback<()>) -> impl IntoView {
    let on_cancel = move |_| booking.update(BookingState::cancel);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && !booking.with_untracked(BookingState::is_submitting) {
            ev.prevent_default();
            booking.update(BookingState::cancel);
        }
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_confirm.run(());
    };
    let submitting = move || booking.with(BookingState::is_submitting);

    view! {
        <div class="dialog-backdrop">
            <form class="dialog dialog--booking" on:submit=on_submit on:keydown=on_keydown tabindex="0">
                <h2>"Book Service"</h2>
                <p class="dialog__subtitle">"Select a date and time for your service."</p>

                <label class="dialog__field">
                    <span>"Date"</span>
                    <input
                        type="date"
                        prop:value=move || booking.with(|b| b.draft.date.clone())
                        on:input=move |ev| booking.update(|b| b.set_date(event_target_value(&ev)))
                    />
                </label>
                <label class="dialog__field">
                    <span>"Time"</span>
                    <input
                        type="time"
                        prop:value=move || booking.with(|b| b.draft.time.clone())
                        on:input=move |ev| booking.update(|b| b.set_time(event_target_value(&ev)))
                    />
                </label>
                <label class="dialog__field">
                    <span>"Duration (hours)"</span>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || booking.with(|b| b.draft.duration.clone())
                        on:input=move |ev| booking.update(|b| b.set_duration(event_target_value(&ev)))
                    />
                </label>

                <Show when=move || booking.with(|b| b.error.is_some())>
                    <p class="dialog__error">{move || booking.with(|b| b.error.clone().unwrap_or_default())}</p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=on_cancel>"Cancel"</button>
                    <button class="btn btn--primary" type="submit" disabled=submitting>
                        {move || if submitting() { "Booking..." } else { "Confirm Booking" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
