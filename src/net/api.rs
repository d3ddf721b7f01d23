//! Backend endpoint paths and the user-facing messages tied to them.
//!
//! ERROR HANDLING
//! ==============
//! Message builders live next to the endpoints so every call site reports a
//! given failure with the same wording.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

pub const REGISTER: &str = "/api/auth/register";
pub const LOGIN: &str = "/api/auth/login";
pub const TOKENS: &str = "/api/tokens";
pub const PROJECTS: &str = "/api/projects";
pub const API_KEYS: &str = "/api/api-keys";
pub const GENERATE_PROJECT: &str = "/api/generate-project";

pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required. Please log in.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired or unauthorized.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Check console for details.";
pub const MISSING_API_KEY_MESSAGE: &str = "API key missing. Please log in again.";

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const LOGIN_NETWORK_MESSAGE: &str = "Network error during login.";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! Logging in...";
pub const REGISTER_NETWORK_MESSAGE: &str = "Network error during registration.";
pub const LOGOUT_MESSAGE: &str = "Logged out successfully.";

const LOGIN_FALLBACK: &str = "Invalid username or API key";
const UNKNOWN_ERROR: &str = "Unknown error";

pub fn login_failed_message(server: Option<&str>) -> String {
    format!("Login failed: {}", server.unwrap_or(LOGIN_FALLBACK))
}

pub fn register_failed_message(server: Option<&str>) -> String {
    format!("Registration failed: {}", server.unwrap_or(UNKNOWN_ERROR))
}

pub fn key_created_message(name: &str) -> String {
    format!("API Key '{name}' created successfully!")
}

pub fn key_create_failed_message(server: Option<&str>) -> String {
    format!("Failed to create API key: {}", server.unwrap_or(UNKNOWN_ERROR))
}

pub fn project_generated_message(name: &str, tokens_used: i64) -> String {
    format!(
        "Project '{name}' generated ({} tokens used).",
        crate::util::format::format_thousands(tokens_used)
    )
}

pub fn generation_failed_message(server: Option<&str>) -> String {
    format!("Generation failed: {}", server.unwrap_or(UNKNOWN_ERROR))
}

/// The `Unknown error` fallback used when a response says `success: false`
/// without an `error` field.
pub(crate) fn unknown_error() -> String {
    UNKNOWN_ERROR.to_owned()
}
