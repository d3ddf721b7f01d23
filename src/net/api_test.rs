use super::*;

#[test]
fn login_failed_message_prefers_server_text() {
    assert_eq!(login_failed_message(Some("bad key")), "Login failed: bad key");
    assert_eq!(login_failed_message(None), "Login failed: Invalid username or API key");
}

#[test]
fn register_failed_message_falls_back_to_unknown() {
    assert_eq!(register_failed_message(Some("email taken")), "Registration failed: email taken");
    assert_eq!(register_failed_message(None), "Registration failed: Unknown error");
}

#[test]
fn key_messages_quote_name() {
    assert_eq!(key_created_message("ci"), "API Key 'ci' created successfully!");
    assert_eq!(key_create_failed_message(Some("limit reached")), "Failed to create API key: limit reached");
}

#[test]
fn project_generated_message_groups_thousands() {
    assert_eq!(project_generated_message("shop", 12_345), "Project 'shop' generated (12,345 tokens used).");
}

#[test]
fn endpoints_are_rooted_under_api() {
    for path in [REGISTER, LOGIN, TOKENS, PROJECTS, API_KEYS, GENERATE_PROJECT] {
        assert!(path.starts_with("/api/"), "{path}");
    }
}
