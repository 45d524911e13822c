use super::*;

fn alice() -> Session {
    Session::new("alice", "alice@example.com").unwrap()
}

// =============================================================================
// StoredSession
// =============================================================================

#[test]
fn stored_session_encodes_flat_record() {
    let raw = StoredSession::from(&alice()).encode().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["username"], "alice");
    assert_eq!(value["email"], "alice@example.com");
    assert_eq!(value["authenticated"], true);
}

#[test]
fn stored_session_decodes_record_from_storage() {
    let raw = r#"{"username":"alice","email":"alice@example.com","authenticated":true}"#;
    let record = StoredSession::decode(raw).unwrap();
    assert_eq!(record.into_session(), Some(alice()));
}

#[test]
fn unauthenticated_record_yields_no_session() {
    let record = StoredSession { username: "alice".into(), email: "alice@example.com".into(), authenticated: false };
    assert_eq!(record.into_session(), None);
}

#[test]
fn record_with_blank_username_yields_no_session() {
    let record = StoredSession { username: String::new(), email: "alice@example.com".into(), authenticated: true };
    assert_eq!(record.into_session(), None);
}

#[test]
fn decode_garbage_is_codec_error() {
    assert!(matches!(StoredSession::decode("not json"), Err(StoreError::Codec(_))));
}

// =============================================================================
// SessionConfig
// =============================================================================

#[test]
fn config_default_key() {
    assert_eq!(SessionConfig::default().storage_key, DEFAULT_STORAGE_KEY);
}

// =============================================================================
// Stores
// =============================================================================

#[test]
fn memory_store_save_load_clear() {
    let mut store = MemoryStore::new();
    assert_eq!(store.load().unwrap(), None);

    let record = StoredSession::from(&alice());
    store.save(&record).unwrap();
    assert_eq!(store.load().unwrap(), Some(record));

    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(store.raw(), None);
}

#[test]
fn memory_store_clones_share_slot() {
    let handle = MemoryStore::new();
    let mut moved = handle.clone();
    moved.save(&StoredSession::from(&alice())).unwrap();
    assert!(handle.raw().is_some_and(|raw| raw.contains("alice")));
}

#[test]
fn memory_store_with_raw_garbage_fails_to_load() {
    let store = MemoryStore::with_raw("{{{");
    assert!(store.load().is_err());
}

#[test]
fn null_store_keeps_nothing() {
    let mut store = NullStore;
    store.save(&StoredSession::from(&alice())).unwrap();
    assert_eq!(store.load().unwrap(), None);
    store.clear().unwrap();
}
