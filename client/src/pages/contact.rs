//! Contact page with an enquiry form.
//!
//! There is no mail backend; a valid submission is acknowledged in place and
//! the form is reset.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

/// Check an enquiry before acknowledging it.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_enquiry(name: &str, email: &str, message: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() || message.trim().is_empty() {
        return Err("Please fill in your name and a message.");
    }
    if session::normalize_email(email).is_none() {
        return Err("Please enter a valid email address.");
    }
    Ok(())
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_enquiry(&name.get(), &email.get(), &message.get()) {
            Ok(()) => {
                info.set(format!("Thanks {}, we'll be in touch soon.", name.get().trim()));
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <div class="page contact">
            <h1>"Get in Touch"</h1>
            <form class="form" on:submit=on_submit>
                <input
                    class="form__input"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <textarea
                    class="form__input form__input--area"
                    placeholder="How can we help?"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <button class="button button--primary" type="submit">"Send Message"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
