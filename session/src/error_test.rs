use super::*;

#[test]
fn invalid_input_display_names_field_and_reason() {
    let err = AuthError::required("username");
    assert_eq!(err.to_string(), "invalid username: is required");
}

#[test]
fn already_exists_display_includes_identifier() {
    let err = AuthError::AlreadyExists { identifier: "bob".into() };
    assert!(err.to_string().contains("bob"));
}

#[test]
fn store_error_converts_to_unavailable() {
    let err: AuthError = StoreError::Backend("quota exceeded".into()).into();
    match err {
        AuthError::Unavailable(msg) => assert!(msg.contains("quota exceeded")),
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[test]
fn codec_error_wraps_serde_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = StoreError::from(json_err);
    assert!(err.to_string().starts_with("session record codec"));
}
