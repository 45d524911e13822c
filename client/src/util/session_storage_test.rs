use super::*;

#[test]
fn default_uses_shared_storage_key() {
    assert_eq!(BrowserStore::default().key(), "freelance_session");
}

#[test]
fn new_uses_configured_key() {
    let config = SessionConfig { storage_key: "other".to_owned() };
    assert_eq!(BrowserStore::new(&config).key(), "other");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn without_browser_nothing_is_stored() {
    let mut store = BrowserStore::default();
    let record = StoredSession { username: "alice".to_owned(), email: "a@x.com".to_owned(), authenticated: true };
    assert!(store.save(&record).is_ok());
    assert!(store.load().unwrap().is_none());
    assert!(store.clear().is_ok());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn context_over_browser_store_still_logs_in() {
    let context = session::SessionContext::new(session::MemoryDirectory::new(), BrowserStore::default());
    context
        .signup(&session::Profile::new("alice", "alice@example.com", "pw"))
        .unwrap();
    assert!(context.is_authenticated());
    assert!(context.restore().is_some());
}
