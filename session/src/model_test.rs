use super::*;

#[test]
fn session_new_rejects_blank_fields() {
    assert!(Session::new("", "a@b.com").is_none());
    assert!(Session::new("alice", "   ").is_none());
    assert!(Session::new("alice", "alice@example.com").is_some());
}

#[test]
fn session_is_always_authenticated() {
    let session = Session::new("alice", "alice@example.com").unwrap();
    assert!(session.authenticated());
}

#[test]
fn state_defaults_to_anonymous() {
    let state = SessionState::default();
    assert_eq!(state, SessionState::Anonymous);
    assert!(!state.is_authenticated());
    assert!(state.session().is_none());
}

#[test]
fn state_from_option() {
    let session = Session::new("bob", "bob@example.com").unwrap();
    let state = SessionState::from(Some(session.clone()));
    assert!(state.is_authenticated());
    assert_eq!(state.session(), Some(&session));
    assert_eq!(SessionState::from(None), SessionState::Anonymous);
}

#[test]
fn session_serializes_username_and_email() {
    let session = Session::new("carol", "carol@example.com").unwrap();
    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["username"], "carol");
    assert_eq!(json["email"], "carol@example.com");
}
