use super::*;

#[test]
fn default_uses_accounts_key() {
    assert_eq!(BrowserDirectory::default().key(), "freelance_accounts");
}

#[test]
fn accounts_key_differs_from_session_key() {
    assert_ne!(ACCOUNTS_STORAGE_KEY, session::DEFAULT_STORAGE_KEY);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn registered_account_can_log_in() {
    let mut directory = BrowserDirectory::default();
    assert!(directory.is_empty());
    let created = directory
        .register(&Profile::new("alice", "alice@example.com", "pw"))
        .unwrap();
    assert_eq!(directory.len(), 1);
    assert_eq!(directory.verify("alice@example.com", "pw").unwrap(), created);
    assert_eq!(directory.verify("alice", "nope"), Err(AuthError::InvalidCredentials));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn context_over_browser_directory_rejects_duplicate_signup() {
    let context = session::SessionContext::new(BrowserDirectory::default(), session::NullStore);
    let profile = Profile::new("alice", "alice@example.com", "pw");
    context.signup(&profile).unwrap();
    context.logout();
    assert_eq!(context.signup(&profile), Err(AuthError::AlreadyExists { identifier: "alice".to_owned() }));
    assert!(context.login("alice", "pw").is_ok());
}
