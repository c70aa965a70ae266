//! Contact page with a locally validated message form.
//!
//! The marketplace API has no contact endpoint, so a valid submission is
//! acknowledged in place and the form is cleared; nothing leaves the browser.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

/// A validated contact form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn acknowledgement(&self) -> String {
        format!("Thanks, {}! We'll get back to you at {}.", self.name, self.email)
    }
}

/// # Errors
///
/// Returns the message to show when a field is blank or the email has no `@`.
pub fn validate_contact_input(name: &str, email: &str, message: &str) -> Result<ContactMessage, &'static str> {
    let (name, email, message) = (name.trim(), email.trim(), message.trim());
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err("Please fill in every field.");
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address.");
    }
    Ok(ContactMessage {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    })
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_contact_input(&name.get(), &email.get(), &message.get()) {
            Ok(sent) => {
                info.set(sent.acknowledgement());
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            Err(reason) => info.set(reason.to_owned()),
        }
    };

    view! {
        <div class="contact-page">
            <section class="contact-page__intro">
                <h1>"Get in Touch"</h1>
                <p>"Questions about a booking or want to list your services? Send us a message."</p>
            </section>
            <form class="contact-form" on:submit=on_submit>
                <input
                    class="contact-input"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="contact-input"
                    type="email"
                    placeholder="Email address"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <textarea
                    class="contact-input contact-input--message"
                    placeholder="How can we help?"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit">"Send Message"</button>
                <Show when=move || !info.get().is_empty()>
                    <p class="contact-form__info">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}
