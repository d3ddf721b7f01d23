//! JSON wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase JSON. Response fields the server
//! may omit or send as `null` fall back to their default, token counts accept
//! any JSON number, and ids accept strings or numbers, so one partially
//! populated record still renders instead of failing the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub key: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
}

/// Shared response shape of the login and register endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// The account returned on a successful login or registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// User id; doubles as the bearer token.
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// `GET /api/tokens` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "token_count")]
    pub tokens: i64,
}

/// `GET /api/projects` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectRecord>,
}

/// A generated project, doubling as a token usage record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub tokens_used: Option<TokenUsage>,
}

/// Input/output token split for one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default, deserialize_with = "token_count")]
    pub input: i64,
    #[serde(default, deserialize_with = "token_count")]
    pub output: i64,
}

/// `GET /api/api-keys` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub api_keys: Vec<ApiKeyRecord>,
}

/// One API key with its accumulated usage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub total_cost: Option<f64>,
    #[serde(default, deserialize_with = "optional_token_count")]
    pub total_tokens: Option<i64>,
}

/// Body of `POST /api/api-keys`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateApiKeyRequest {
    pub name: String,
}

/// Bare `{success}` acknowledgement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

/// Body of `POST /api/generate-project`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateProjectRequest {
    pub project_type: String,
    pub complexity: String,
    pub style: String,
    pub description: String,
    pub features: Vec<String>,
}

/// `POST /api/generate-project` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateProjectResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    pub project: GeneratedProject,
    #[serde(default, deserialize_with = "null_as_default")]
    pub usage: GenerationUsage,
}

/// Generated scaffolding: file name to file contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedProject {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: BTreeMap<String, String>,
}

/// Token accounting reported with a generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationUsage {
    #[serde(default, deserialize_with = "token_count")]
    pub total_tokens: i64,
    #[serde(default, deserialize_with = "token_count")]
    pub remaining_tokens: i64,
}

/// A server timestamp: RFC 3339 text or epoch milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Text(String),
}

// =============================================================
// Lenient field decoding
// =============================================================

/// `null` decodes like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Token count from any JSON number; `null` is 0.
fn token_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(optional_token_count(deserializer)?.unwrap_or(0))
}

/// Fractional counts are rounded to the nearest token.
fn optional_token_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(count) = number.as_i64() {
        return Ok(Some(count));
    }
    number
        .as_f64()
        .map(round_count)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("token count out of range: {number}")))
}

#[allow(clippy::cast_possible_truncation)]
fn round_count(value: f64) -> i64 {
    // `as` saturates at the i64 bounds.
    value.round() as i64
}

/// Opaque id sent as either a JSON string or a number.
fn opaque_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!("expected a string or number id, got {other}"))),
    }
}
