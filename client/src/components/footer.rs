//! Site footer.

use leptos::prelude::*;

use super::navbar::NAV_LINKS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <p class="footer__brand">"Freelancer Service Platform"</p>
                <nav class="footer__links">
                    {NAV_LINKS
                        .iter()
                        .map(|&(path, label)| view! { <a href=path>{label}</a> })
                        .collect_view()}
                </nav>
                <p class="footer__copy">"Creative resumes, portfolios and projects."</p>
            </div>
        </footer>
    }
}
