//! Signup page: registers an account and signs in as it.

use leptos::prelude::*;
use session::SessionContext;

use super::login::log_failure;
use crate::state::ui::UiState;
use crate::util::auth::{auth_error_message, validate_signup_input};

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let profile = match validate_signup_input(&username.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(profile) => profile,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        match session.signup(&profile) {
            Ok(_) => {
                password.set(String::new());
                confirm.set(String::new());
                info.set(String::new());
                ui.update(|u| u.redirect_to("/"));
            }
            Err(e) => {
                log_failure("signup", &e);
                info.set(auth_error_message(&e));
            }
        }
    };

    let input = move |kind: &'static str, placeholder: &'static str, autocomplete: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="form__input"
                type=kind
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="page auth-page">
            <div class="auth-card">
                <h1>"Create an Account"</h1>
                <p class="auth-card__subtitle">"Join to unlock exclusive offers"</p>
                <form class="form" on:submit=on_submit>
                    {input("text", "Username", "username", username)}
                    {input("email", "Email", "email", email)}
                    {input("password", "Password", "new-password", password)}
                    {input("password", "Confirm password", "new-password", confirm)}
                    <button class="button button--primary" type="submit">"Sign Up"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="form__message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
