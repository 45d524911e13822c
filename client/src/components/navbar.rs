//! Fixed site navigation with profile dropdown and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. It shows the signed-in identity from `AuthState`
//! and owns the `SessionContext::logout` call.
//! Route changes requested by handlers go through `UiState::redirect` and are
//! performed by an effect here, so the navigate closure is never captured in
//! event handlers. An open dropdown sits over a transparent backdrop; a click
//! on the backdrop is a click outside and closes it.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::SessionContext;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// `(path, label)` for each top-level page, in display order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/services", "Services"),
    ("/portfolio", "Portfolio"),
    ("/contact", "Contact"),
    ("/offers-and-updates", "Offers & Updates"),
];

/// Link class for `path` when the router is at `current`. Exact match only.
pub fn nav_link_class(path: &str, current: &str) -> &'static str {
    if path == current { "navbar__link navbar__link--active" } else { "navbar__link" }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        if ui.get().redirect.is_none() {
            return;
        }
        let mut target = None;
        ui.update(|u| target = u.take_redirect());
        if let Some(path) = target {
            navigate(path, NavigateOptions::default());
        }
    });

    // Close menus whenever the route changes.
    Effect::new(move || {
        location.pathname.track();
        ui.update(UiState::close_all);
    });

    let on_logout = Callback::new(move |()| {
        session.logout();
        ui.update(|u| {
            u.close_all();
            u.redirect_to("/");
        });
    });

    let links = move |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|&(path, label)| {
                view! {
                    <a
                        href=path
                        class=move || nav_link_class(path, &location.pathname.get())
                        on:click=move |_| {
                            if mobile {
                                ui.update(UiState::close_menu);
                            }
                        }
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    "Freelancer Service Platform"
                </a>

                <div class="navbar__links">{links(false)}</div>

                <div class="navbar__profile">
                    <button
                        class="navbar__profile-button"
                        aria-label="User profile"
                        on:click=move |_| {
                            let authenticated = auth.get_untracked().is_authenticated();
                            ui.update(|u| {
                                u.profile_click(authenticated);
                            });
                        }
                    >
                        {move || if auth.get().is_authenticated() { "●" } else { "○" }}
                    </button>
                    <Show when=move || ui.get().profile_open && auth.get().is_authenticated()>
                        <div
                            class="profile-dropdown__backdrop"
                            on:click=move |_| ui.update(UiState::close_profile)
                        ></div>
                        <ProfileDropdown auth=auth on_logout=on_logout />
                    </Show>
                </div>

                <button
                    class="navbar__menu-toggle"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || ui.get().menu_open.to_string()
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {move || if ui.get().menu_open { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || ui.get().menu_open>
                <div class="navbar__mobile">{links(true)}</div>
            </Show>
        </nav>
    }
}

#[component]
fn ProfileDropdown(auth: RwSignal<AuthState>, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <div class="profile-dropdown">
            <div class="profile-dropdown__identity">
                <p class="profile-dropdown__name">{move || auth.get().username()}</p>
                <p class="profile-dropdown__email">{move || auth.get().email()}</p>
            </div>
            <button class="profile-dropdown__logout" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </div>
    }
}
