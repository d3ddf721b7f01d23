use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::state::auth::{MemoryStore, TOKEN_KEY, USERNAME_KEY};
use crate::state::notifications::NoticeKind;
use crate::testing::{EventLog, ScriptedTransport, client, logged_in_client, logged_in_session};

fn bob_login_response() -> serde_json::Value {
    json!({
        "success": true,
        "user": { "id": "u1", "username": "bob", "email": "b@x.com" },
        "apiKey": "ak1"
    })
}

// =============================================================
// route_by_auth_state
// =============================================================

#[test]
fn startup_without_token_routes_to_login() {
    let session = SessionManager::new(MemoryStore::default());
    let events = EventLog::attach(&session);
    assert_eq!(session.route_by_auth_state(), View::Login);
    assert_eq!(events.routes(), vec![View::Login]);
}

#[test]
fn startup_with_token_routes_to_dashboard() {
    let session = SessionManager::new(MemoryStore::with_session(&logged_in_session()));
    assert_eq!(session.route_by_auth_state(), View::Dashboard);
    assert_eq!(session.view(), View::Dashboard);
}

#[test]
fn register_and_login_links_switch_views() {
    let session = SessionManager::new(MemoryStore::default());
    session.route_by_auth_state();
    assert!(session.show_register());
    assert_eq!(session.view(), View::Register);
    assert!(session.show_login());
    assert_eq!(session.view(), View::Login);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_stores_session_and_routes_to_dashboard() {
    let client = client(ScriptedTransport::new().respond(200, bob_login_response()));
    let events = EventLog::attach(client.session());

    let session = block_on(client.login("bob", "K")).unwrap();

    assert_eq!(session, logged_in_session());
    let stored = client.session().session();
    assert_eq!(stored.token.as_deref(), Some("u1"));
    assert_eq!(stored.api_key.as_deref(), Some("ak1"));
    assert_eq!(stored.username.as_deref(), Some("bob"));
    assert_eq!(stored.email.as_deref(), Some("b@x.com"));
    assert_eq!(client.session().view(), View::Dashboard);
    assert_eq!(events.messages(), vec!["Login successful!"]);
    assert_eq!(events.routes(), vec![View::Dashboard]);
}

#[test]
fn login_posts_credentials_without_bearer() {
    let client = client(ScriptedTransport::new().respond(200, bob_login_response()));
    block_on(client.login("bob", "K")).unwrap();

    let requests = client.gateway().transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "http://backend.test/api/auth/login");
    assert_eq!(requests[0].header_value("authorization"), None);
    let body: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "username": "bob", "key": "K" }));
}

#[test]
fn login_rejection_reports_server_message_and_keeps_view() {
    let client = client(ScriptedTransport::new().respond(401, json!({ "error": "Invalid credentials" })));
    client.session().route_by_auth_state();
    let events = EventLog::attach(client.session());

    let err = block_on(client.login("bob", "wrong")).unwrap_err();

    assert_eq!(err, ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) });
    assert!(client.session().store().is_empty());
    assert_eq!(client.session().view(), View::Login);
    assert_eq!(events.messages(), vec!["Login failed: Invalid credentials"]);
    assert!(events.routes().is_empty());
}

#[test]
fn login_rejection_without_message_uses_fallback() {
    let client = client(ScriptedTransport::new().respond(200, json!({ "success": false })));
    let events = EventLog::attach(client.session());

    block_on(client.login("bob", "K")).unwrap_err();

    assert_eq!(events.messages(), vec!["Login failed: Invalid username or API key"]);
}

#[test]
fn login_network_failure_is_reported_and_stores_nothing() {
    let client = client(ScriptedTransport::new().fail("offline"));
    let events = EventLog::attach(client.session());

    let err = block_on(client.login("bob", "K")).unwrap_err();

    assert_eq!(err, ApiError::Network("offline".to_owned()));
    assert!(client.session().store().is_empty());
    assert_eq!(events.messages(), vec!["Network error during login."]);
    let notes = events.notifications();
    assert_eq!(notes[0].kind, NoticeKind::Error);
}

#[test]
fn login_success_missing_api_key_stores_nothing() {
    let body = json!({ "success": true, "user": { "id": "u1", "username": "bob" } });
    let client = client(ScriptedTransport::new().respond(200, body));

    block_on(client.login("bob", "K")).unwrap_err();

    assert!(client.session().store().is_empty());
    assert_eq!(client.session().view(), View::Login);
}

#[test]
fn login_accepts_numeric_user_id_as_token() {
    let body = json!({
        "success": true,
        "user": { "id": 42, "username": "bob", "email": "b@x.com" },
        "apiKey": "ak1"
    });
    let client = client(ScriptedTransport::new().respond(200, body));
    let events = EventLog::attach(client.session());

    block_on(client.login("bob", "K")).unwrap();

    assert_eq!(client.session().session().token.as_deref(), Some("42"));
    assert_eq!(client.session().view(), View::Dashboard);
    assert_eq!(events.messages(), vec!["Login successful!"]);
}

#[test]
fn login_then_logout_leaves_empty_store_on_login_view() {
    let client = client(ScriptedTransport::new().respond(200, bob_login_response()));
    block_on(client.login("bob", "K")).unwrap();
    let events = EventLog::attach(client.session());

    client.logout();

    assert!(client.session().store().is_empty());
    assert_eq!(client.session().view(), View::Login);
    assert_eq!(events.messages(), vec!["Logged out successfully."]);
    assert_eq!(events.routes(), vec![View::Login]);
}

#[test]
fn rapid_double_login_sends_one_request() {
    let transport = ScriptedTransport::new()
        .respond(200, bob_login_response())
        .respond(200, bob_login_response());
    let client = client(transport);

    let (first, second) = block_on(async { futures::join!(client.login("bob", "K"), client.login("bob", "K")) });

    assert!(first.is_ok());
    assert_eq!(second, Err(ApiError::Busy));
    assert_eq!(client.gateway().transport().requests().len(), 1);

    // The slot is free again once the first request resolved.
    assert!(block_on(client.login("bob", "K")).is_ok());
    assert_eq!(client.gateway().transport().requests().len(), 2);
}

#[test]
fn login_can_be_resubmitted_after_failure() {
    let transport = ScriptedTransport::new().fail("offline").respond(200, bob_login_response());
    let client = client(transport);

    assert!(block_on(client.login("bob", "K")).is_err());
    assert!(block_on(client.login("bob", "K")).is_ok());
    assert_eq!(client.gateway().transport().requests().len(), 2);
}

// =============================================================
// register
// =============================================================

#[test]
fn register_success_logs_user_in() {
    let client = client(ScriptedTransport::new().respond(201, bob_login_response()));
    client.session().route_by_auth_state();
    client.session().show_register();
    let events = EventLog::attach(client.session());

    block_on(client.register("b@x.com", "bob")).unwrap();

    assert!(client.session().is_authenticated());
    assert_eq!(client.session().view(), View::Dashboard);
    assert_eq!(events.messages(), vec!["Registration successful! Logging in..."]);
    let requests = client.gateway().transport().requests();
    assert_eq!(requests[0].url, "http://backend.test/api/auth/register");
}

#[test]
fn register_failure_leaves_store_and_view_unchanged() {
    let client = client(ScriptedTransport::new().respond(200, json!({ "success": false, "error": "email taken" })));
    let store = client.session().store();
    store.set_item(USERNAME_KEY, "alice");
    store.set_item("theme", "dark");
    client.session().route_by_auth_state();
    client.session().show_register();
    let before = client.session().session();
    let events = EventLog::attach(client.session());

    let err = block_on(client.register("b@x.com", "bob")).unwrap_err();

    assert_eq!(err, ApiError::Rejected("email taken".to_owned()));
    assert_eq!(store.len(), 2);
    assert_eq!(store.get_item(USERNAME_KEY).as_deref(), Some("alice"));
    assert_eq!(store.get_item("theme").as_deref(), Some("dark"));
    assert_eq!(store.get_item(TOKEN_KEY), None);
    assert_eq!(client.session().session(), before);
    assert_eq!(client.session().view(), View::Register);
    let messages = events.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("email taken"));
    assert!(events.routes().is_empty());
}

#[test]
fn register_malformed_body_reports_network_error() {
    let client = client(ScriptedTransport::new().respond_raw(200, "<html>oops</html>"));
    let events = EventLog::attach(client.session());

    let err = block_on(client.register("b@x.com", "bob")).unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(events.messages(), vec!["Network error during registration."]);
}

// =============================================================
// expire / require_login
// =============================================================

#[test]
fn expire_clears_session_and_notifies_once() {
    let client = logged_in_client(ScriptedTransport::new());
    let events = EventLog::attach(client.session());

    client.session().expire();
    client.session().expire();

    assert!(client.session().store().is_empty());
    assert_eq!(client.session().view(), View::Login);
    assert_eq!(events.messages(), vec!["Session expired or unauthorized."]);
}

#[test]
fn listener_added_during_dispatch_does_not_panic() {
    let session = std::rc::Rc::new(SessionManager::new(MemoryStore::default()));
    let inner = std::rc::Rc::clone(&session);
    session.subscribe(move |_| inner.subscribe(|_| {}));
    session.route_by_auth_state();
    session.route_by_auth_state();
}
