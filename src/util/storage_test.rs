#![cfg(not(feature = "csr"))]

use super::*;
use crate::state::auth::Session;

#[test]
fn outside_the_browser_every_read_misses() {
    let store = BrowserStore;
    store.set_item("user_token", "u1");
    assert_eq!(store.get_item("user_token"), None);
}

#[test]
fn failed_mutation_is_reported_not_swallowed() {
    assert!(!warn_on_failure("remove", "user_token", Err("QuotaExceededError")));
    assert!(warn_on_failure::<()>("remove", "user_token", Ok(())));
}

#[test]
fn saved_session_is_not_observable_without_storage() {
    let store = BrowserStore;
    store.save(&Session { token: Some("u1".to_owned()), ..Session::default() });
    assert!(store.load().is_empty());
    assert!(!store.load().is_authenticated());
}
