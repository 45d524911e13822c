//! Offers & updates page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `AuthState` to gate claiming. Claim state lives in a page-local
//! signal; the success modal is hidden by a delayed task that checks the
//! modal sequence so it never closes a modal opened after it was scheduled.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::offers::{ClaimOutcome, OFFERS, Offer, OfferModal, OffersState, format_valid_until};

#[component]
pub fn OffersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let offers = RwSignal::new(OffersState::default());

    let on_claim = Callback::new(move |offer_id: &'static str| {
        let authenticated = auth.get_untracked().is_authenticated();
        let mut outcome = ClaimOutcome::UnknownOffer;
        offers.update(|s| outcome = s.claim(offer_id, authenticated));
        if outcome == ClaimOutcome::Claimed {
            schedule_auto_hide(offers, offers.get_untracked().modal_seq);
        }
    });
    let on_close = Callback::new(move |()| offers.update(OffersState::close_modal));

    view! {
        <div class="page offers">
            <header class="offers__header">
                <h1>"Special Offers & Updates"</h1>
                <p>"Discover exclusive deals and stay updated with our latest services and promotions"</p>
            </header>

            <div class="card-grid">
                {OFFERS
                    .iter()
                    .map(|offer| view! { <OfferCard offer=offer offers=offers on_claim=on_claim /> })
                    .collect_view()}
            </div>

            {move || match offers.get().modal {
                OfferModal::Hidden => None,
                OfferModal::LoginRequired(_) => Some(view! { <LoginRequiredModal on_close=on_close /> }.into_any()),
                OfferModal::Claimed(offer) => {
                    Some(view! { <ClaimedModal offer=offer on_close=on_close /> }.into_any())
                }
            }}
        </div>
    }
}

#[component]
fn OfferCard(
    offer: &'static Offer,
    offers: RwSignal<OffersState>,
    on_claim: Callback<&'static str>,
) -> impl IntoView {
    let claimed = move || offers.get().is_claimed(offer.id);

    view! {
        <div class=move || if claimed() { "card offer offer--claimed" } else { "card offer" }>
            <div class="offer__badge">{offer.discount}</div>
            <div class="offer__head">
                <h3>{offer.title}</h3>
                <span class="offer__category">{offer.category}</span>
            </div>
            <p>{offer.description}</p>
            <div class="offer__meta">
                <span>"Valid until: " {format_valid_until(offer.valid_until)}</span>
                <span class="offer__code">"Code: " {offer.code}</span>
            </div>
            <button
                class="button button--primary offer__claim"
                disabled=claimed
                on:click=move |_| on_claim.run(offer.id)
            >
                {move || if claimed() { "Claimed" } else { "Claim Offer" }}
            </button>
        </div>
    }
}

#[component]
fn LoginRequiredModal(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog">
                <div class="modal__head">
                    <h3>"Login Required"</h3>
                    <button class="modal__close" on:click=move |_| on_close.run(())>"✕"</button>
                </div>
                <p>"To avail this offer, you need to log in. Please sign in to your account to continue."</p>
                <div class="modal__actions">
                    <button class="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <a href="/login" class="button button--primary">"Login"</a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ClaimedModal(offer: &'static Offer, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog">
                <div class="modal__head">
                    <h3>"Offer Claimed!"</h3>
                    <button class="modal__close" on:click=move |_| on_close.run(())>"✕"</button>
                </div>
                <p>"You have successfully claimed " <strong>{offer.title}</strong> "."</p>
                <p class="modal__code">"Use code " <strong>{offer.code}</strong> " at checkout."</p>
            </div>
        </div>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn schedule_auto_hide(offers: RwSignal<OffersState>, seq: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(
            crate::state::offers::SUCCESS_MODAL_SECS,
        ))
        .await;
        // The page may have been left while we slept.
        offers.try_update(|s| s.auto_hide(seq));
    });
}
