use super::*;

#[test]
fn ui_state_default_everything_closed() {
    let state = UiState::default();
    assert!(!state.menu_open);
    assert!(!state.profile_open);
    assert_eq!(state.redirect, None);
}

#[test]
fn toggle_menu_flips() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn profile_click_when_anonymous_redirects_to_login() {
    let mut state = UiState::default();
    assert_eq!(state.profile_click(false), ProfileAction::OpenLogin);
    assert!(!state.profile_open);
    assert_eq!(state.take_redirect(), Some("/login"));
    assert_eq!(state.take_redirect(), None);
}

#[test]
fn profile_click_when_authenticated_toggles_dropdown() {
    let mut state = UiState::default();
    assert_eq!(state.profile_click(true), ProfileAction::Toggled);
    assert!(state.profile_open);
    assert_eq!(state.profile_click(true), ProfileAction::Toggled);
    assert!(!state.profile_open);
    assert_eq!(state.redirect, None);
}

#[test]
fn close_all_closes_menu_and_dropdown() {
    let mut state = UiState { menu_open: true, profile_open: true, redirect: None };
    state.close_all();
    assert!(!state.menu_open);
    assert!(!state.profile_open);
}

#[test]
fn close_profile_leaves_menu_and_redirect_alone() {
    let mut state = UiState { menu_open: true, profile_open: true, redirect: Some("/") };
    state.close_profile();
    assert!(!state.profile_open);
    assert!(state.menu_open);
    assert_eq!(state.redirect, Some("/"));

    state.close_profile();
    assert!(!state.profile_open);
}

#[test]
fn outside_click_then_profile_click_reopens() {
    let mut state = UiState::default();
    state.profile_click(true);
    state.close_profile();
    assert_eq!(state.profile_click(true), ProfileAction::Toggled);
    assert!(state.profile_open);
}

#[test]
fn redirect_to_sets_pending_path() {
    let mut state = UiState::default();
    state.redirect_to("/");
    assert_eq!(state.redirect, Some("/"));
}
