//! Account creation page for customers and providers.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Role, SignupRequest};
use crate::state::session::SessionState;

/// Trim the form fields and build the request, or explain what is missing.
///
/// # Errors
///
/// Returns the message to show when any field is blank.
pub fn validate_signup_input(name: &str, email: &str, password: &str, role: Role) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.trim().is_empty() {
        return Err("Fill in your name, email, and password.");
    }
    Ok(SignupRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role,
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::User);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let signed_up = RwSignal::new(false);

    Effect::new(move || {
        if signed_up.get() {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup_input(&name.get(), &email.get(), &password.get(), role.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&request).await {
                Ok(resp) => {
                    let mut store = crate::util::storage::browser_session_store();
                    if let Some(Err(e)) = session.try_update(|s| s.sign_in(&mut store, resp.into())) {
                        log::warn!("session not persisted: {e}");
                    }
                    signed_up.set(true);
                }
                Err(e) => {
                    log::warn!("signup failed: {e}");
                    error.set(e.user_message());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, session);
    };

    let role_options = [Role::User, Role::Provider]
        .into_iter()
        .map(|option| {
            view! {
                <option value=option.as_str() selected=move || role.get() == option>
                    {option.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join our community today"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select class="auth-input" on:change=move |ev| role.set(Role::from_param(&event_target_value(&ev)))>
                        {role_options}
                    </select>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-message auth-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/auth/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
