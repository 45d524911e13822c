//! Local UI chrome state (mobile menu, profile dropdown, pending redirect).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session mirror so the
//! navbar can evolve independently of auth data. Handlers that need to change
//! route set `redirect`; an effect inside the router performs the navigation.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// What a click on the profile button did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileAction {
    /// Anonymous visitor; sent to the login page.
    OpenLogin,
    /// Signed-in user; dropdown toggled.
    Toggled,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub profile_open: bool,
    pub redirect: Option<&'static str>,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn profile_click(&mut self, authenticated: bool) -> ProfileAction {
        if authenticated {
            self.profile_open = !self.profile_open;
            ProfileAction::Toggled
        } else {
            self.profile_open = false;
            self.redirect = Some("/login");
            ProfileAction::OpenLogin
        }
    }

    /// Click anywhere outside the dropdown.
    pub fn close_profile(&mut self) {
        self.profile_open = false;
    }

    pub fn close_all(&mut self) {
        self.menu_open = false;
        self.profile_open = false;
    }

    pub fn redirect_to(&mut self, path: &'static str) {
        self.redirect = Some(path);
    }

    pub fn take_redirect(&mut self) -> Option<&'static str> {
        self.redirect.take()
    }
}
