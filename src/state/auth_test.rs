use super::*;

fn full_session() -> Session {
    Session {
        token: Some("u1".to_owned()),
        api_key: Some("ak1".to_owned()),
        username: Some("bob".to_owned()),
        email: Some("b@x.com".to_owned()),
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_is_unauthenticated_and_empty() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(session.is_empty());
}

#[test]
fn empty_token_is_not_authenticated() {
    let session = Session { token: Some(String::new()), ..Session::default() };
    assert!(!session.is_authenticated());
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn save_then_load_returns_same_session() {
    let store = MemoryStore::default();
    store.save(&full_session());
    assert_eq!(store.load(), full_session());
    assert_eq!(store.get_item(TOKEN_KEY).as_deref(), Some("u1"));
    assert_eq!(store.get_item(API_KEY_KEY).as_deref(), Some("ak1"));
}

#[test]
fn save_removes_fields_that_are_none() {
    let store = MemoryStore::with_session(&full_session());
    store.save(&Session { token: Some("u2".to_owned()), ..Session::default() });
    assert_eq!(store.len(), 1);
    assert_eq!(store.load().email, None);
}

#[test]
fn clear_removes_every_session_key() {
    let store = MemoryStore::with_session(&full_session());
    store.clear();
    assert!(store.is_empty());
    assert!(store.load().is_empty());
}

#[test]
fn clear_leaves_unrelated_keys() {
    let store = MemoryStore::with_session(&full_session());
    store.set_item("theme", "dark");
    store.clear();
    assert_eq!(store.get_item("theme").as_deref(), Some("dark"));
}

#[test]
fn load_treats_empty_values_as_absent() {
    let store = MemoryStore::default();
    store.set_item(TOKEN_KEY, "");
    assert_eq!(store.load().token, None);
}
