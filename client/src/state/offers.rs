//! Offer catalogue and claim state for the offers page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Claiming is gated on the session: anonymous visitors get a login prompt,
//! signed-in users get the offer marked as claimed and a success modal that
//! hides itself after [`SUCCESS_MODAL_SECS`]. Claims are page-local and reset
//! when the page is left.

#[cfg(test)]
#[path = "offers_test.rs"]
mod offers_test;

/// How long the claim-success modal stays up.
pub const SUCCESS_MODAL_SECS: u64 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offer {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub discount: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub valid_until: &'static str,
    pub code: &'static str,
    pub category: &'static str,
}

pub static OFFERS: [Offer; 5] = [
    Offer {
        id: "1",
        title: "Resume Design Special",
        description: "Get 20% off on all resume design services",
        discount: "20% OFF",
        valid_until: "2025-06-30",
        code: "RESUME20",
        category: "Resume",
    },
    Offer {
        id: "2",
        title: "Portfolio Bundle",
        description: "Portfolio creation with 3 months of hosting included",
        discount: "FREE HOSTING",
        valid_until: "2025-07-15",
        code: "PORTBUNDLE",
        category: "Portfolio",
    },
    Offer {
        id: "3",
        title: "LinkedIn Optimization",
        description: "Complete LinkedIn profile optimization at a special price",
        discount: "15% OFF",
        valid_until: "2025-08-01",
        code: "LINKEDIN15",
        category: "LinkedIn",
    },
    Offer {
        id: "4",
        title: "Web Development Deal",
        description: "Custom web development with free SEO setup",
        discount: "FREE SEO",
        valid_until: "2025-09-30",
        code: "WEBSEO",
        category: "Development",
    },
    Offer {
        id: "5",
        title: "New Client Special",
        description: "First-time clients receive a discount on any service",
        discount: "10% OFF",
        valid_until: "2025-12-31",
        code: "NEWCLIENT10",
        category: "Special",
    },
];

pub fn find_offer(id: &str) -> Option<&'static Offer> {
    OFFERS.iter().find(|offer| offer.id == id)
}

/// Modal currently shown over the offer grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OfferModal {
    #[default]
    Hidden,
    LoginRequired(&'static Offer),
    Claimed(&'static Offer),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    LoginRequired,
    Claimed,
    AlreadyClaimed,
    UnknownOffer,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OffersState {
    pub claimed: Vec<&'static str>,
    pub modal: OfferModal,
    /// Bumped whenever a modal opens, so a delayed auto-hide can tell
    /// whether it is still looking at the modal it was scheduled for.
    pub modal_seq: u64,
}

impl OffersState {
    pub fn claim(&mut self, offer_id: &str, authenticated: bool) -> ClaimOutcome {
        let Some(offer) = find_offer(offer_id) else {
            return ClaimOutcome::UnknownOffer;
        };
        if !authenticated {
            self.open(OfferModal::LoginRequired(offer));
            return ClaimOutcome::LoginRequired;
        }
        if self.is_claimed(offer.id) {
            return ClaimOutcome::AlreadyClaimed;
        }
        self.claimed.push(offer.id);
        self.open(OfferModal::Claimed(offer));
        ClaimOutcome::Claimed
    }

    pub fn is_claimed(&self, offer_id: &str) -> bool {
        self.claimed.iter().any(|id| *id == offer_id)
    }

    pub fn close_modal(&mut self) {
        self.modal = OfferModal::Hidden;
    }

    /// Close the success modal opened at `seq`. Returns whether it closed.
    pub fn auto_hide(&mut self, seq: u64) -> bool {
        if self.modal_seq != seq || !matches!(self.modal, OfferModal::Claimed(_)) {
            return false;
        }
        self.close_modal();
        true
    }

    fn open(&mut self, modal: OfferModal) {
        self.modal = modal;
        self.modal_seq += 1;
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn days_in_month(year: u32, month: usize) -> u32 {
    match month {
        2 if year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400)) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Render `YYYY-MM-DD` as `Month D, YYYY`; anything else, including days
/// past the end of the month, is returned as-is.
pub fn format_valid_until(date: &str) -> String {
    let mut parts = date.splitn(3, '-');
    let parsed = (|| {
        let year: u32 = parts.next()?.parse().ok()?;
        let month: usize = parts.next()?.parse().ok()?;
        let day: u32 = parts.next()?.parse().ok()?;
        let name = MONTHS.get(month.checked_sub(1)?)?;
        (1..=days_in_month(year, month)).contains(&day).then(|| format!("{name} {day}, {year}"))
    })();
    parsed.unwrap_or_else(|| date.to_owned())
}
