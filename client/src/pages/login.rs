//! Login page: username or email plus password against the session context.

use leptos::prelude::*;
use session::SessionContext;

use crate::state::ui::UiState;
use crate::util::auth::{auth_error_message, validate_login_input};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (id_value, pw_value) = match validate_login_input(&identifier.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        match session.login(&id_value, &pw_value) {
            Ok(_) => {
                password.set(String::new());
                info.set(String::new());
                ui.update(|u| u.redirect_to("/"));
            }
            Err(e) => {
                log_failure("login", &e);
                info.set(auth_error_message(&e));
            }
        }
    };

    view! {
        <div class="page auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to claim offers and track your projects"</p>
                <form class="form" on:submit=on_submit>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Username or email"
                        autocomplete="username"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit">"Login"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="form__message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub(crate) fn log_failure(action: &str, err: &session::AuthError) {
    #[cfg(feature = "hydrate")]
    log::info!("{action} failed: {err}");
}
