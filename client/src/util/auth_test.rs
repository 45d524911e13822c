use super::*;

#[test]
fn validate_login_input_trims_identifier() {
    assert_eq!(
        validate_login_input("  alice  ", "pw"),
        Ok(("alice".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter your username or email and password."));
    assert_eq!(validate_login_input("alice", ""), Err("Enter your username or email and password."));
}

#[test]
fn validate_signup_input_builds_profile() {
    let profile = validate_signup_input(" bob ", " Bob@Example.com ", "pw", "pw").unwrap();
    assert_eq!(profile, Profile::new("bob", "Bob@Example.com", "pw"));
}

#[test]
fn validate_signup_input_requires_every_field() {
    assert_eq!(validate_signup_input("", "b@x.com", "pw", "pw"), Err("Fill in every field."));
    assert_eq!(validate_signup_input("bob", " ", "pw", "pw"), Err("Fill in every field."));
    assert_eq!(validate_signup_input("bob", "b@x.com", "", ""), Err("Fill in every field."));
}

#[test]
fn validate_signup_input_rejects_mismatched_confirmation() {
    assert_eq!(validate_signup_input("bob", "b@x.com", "pw", "wp"), Err("Passwords do not match."));
}

#[test]
fn auth_error_message_invalid_input_capitalizes_field() {
    let err = AuthError::InvalidInput { field: "email", reason: "is malformed" };
    assert_eq!(auth_error_message(&err), "Email is malformed.");
}

#[test]
fn auth_error_message_covers_each_variant() {
    assert_eq!(
        auth_error_message(&AuthError::InvalidCredentials),
        "Incorrect username/email or password."
    );
    assert_eq!(
        auth_error_message(&AuthError::AlreadyExists { identifier: "bob".to_owned() }),
        "An account for bob already exists."
    );
    assert!(auth_error_message(&AuthError::Unavailable("disk".to_owned())).contains("unavailable"));
    assert!(auth_error_message(&AuthError::Superseded).contains("replaced"));
}
