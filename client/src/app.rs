//! Application shell and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the one `SessionContext` for the page and bridges it into
//! Leptos: a subscription folds every transition into `RwSignal<AuthState>`,
//! and the context handle itself is provided so pages can call login, signup
//! and logout directly. Accounts and the session record both live in
//! `localStorage`. The stored session is restored in an effect, which only
//! runs in the browser, so server-rendered HTML is always anonymous.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use session::{SessionConfig, SessionContext};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::offers::OffersPage;
use crate::pages::portfolio::PortfolioPage;
use crate::pages::services::ServicesPage;
use crate::pages::signup::SignupPage;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::account_storage::BrowserDirectory;
use crate::util::session_storage::BrowserStore;

/// HTML document wrapper rendered by the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new(BrowserDirectory::default(), BrowserStore::new(&SessionConfig::default()));
    let auth = RwSignal::new(AuthState::from_context(&session));
    let ui = RwSignal::new(UiState::default());

    let subscription = session.subscribe(move |event| {
        auth.try_update(|state| state.apply(event));
    });
    on_cleanup({
        let session = session.clone();
        move || {
            session.unsubscribe(subscription);
        }
    });

    Effect::new({
        let session = session.clone();
        move || {
            session.restore();
        }
    });

    provide_context(session);
    provide_context(auth);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/freelance.css" />
        <Title text="Freelancer Service Platform" />
        <Router>
            <Navbar />
            <main class="site-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/portfolio") view=PortfolioPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/offers-and-updates") view=OffersPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/signup") view=SignupPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"Page not found"</h1>
            <a href="/" class="button button--primary">"Back to Home"</a>
        </div>
    }
}
