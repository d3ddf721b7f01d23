//! Authenticated request gateway.
//!
//! Every backend call that carries a credential goes through here. This is
//! the only place the bearer token (or `X-API-KEY`) is attached and the only
//! place a 401 clears the session, so session invalidation follows one path
//! no matter how many call sites exist.
//!
//! ERROR HANDLING
//! ==============
//! - no credential: no request; "authentication required" notice + route to login
//! - transport failure or malformed success body: network notice
//! - 401: session cleared, "session expired" notice, route to login
//! - other non-success status or an `error` field: silent `Err`; callers
//!   decide whether to notify

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api;
use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::config::ClientConfig;
use crate::session::SessionManager;
use crate::state::auth::SessionStore;
use crate::state::notifications::Notification;

/// Which stored credential an authenticated call presents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Credential {
    /// `Authorization: Bearer <session token>`.
    Bearer,
    /// `X-API-KEY: <stored api key>`.
    ApiKey,
}

/// Sends backend requests over a [`Transport`].
pub struct Gateway<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Bearer-authenticated call returning the raw JSON payload.
    ///
    /// # Errors
    ///
    /// See the module docs for the failure taxonomy.
    pub async fn request<S: SessionStore>(
        &self,
        session: &SessionManager<S>,
        endpoint: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        self.send_authenticated(session, endpoint, method, body, Credential::Bearer)
            .await
    }

    /// Bearer-authenticated `GET` decoded into `R`.
    ///
    /// # Errors
    ///
    /// See [`Gateway::request`]; a payload that does not match `R` is a
    /// reported [`ApiError::Decode`].
    pub async fn get<S: SessionStore, R: DeserializeOwned>(
        &self,
        session: &SessionManager<S>,
        endpoint: &str,
    ) -> Result<R, ApiError> {
        let value = self.request(session, endpoint, Method::Get, None).await?;
        decode_reported(session, endpoint, value)
    }

    /// Bearer-authenticated `POST` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Gateway::get`].
    pub async fn post<S: SessionStore, B: Serialize, R: DeserializeOwned>(
        &self,
        session: &SessionManager<S>,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = encode(body)?;
        let value = self.request(session, endpoint, Method::Post, Some(body)).await?;
        decode_reported(session, endpoint, value)
    }

    /// `POST` authenticated with the stored API key instead of the token.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingApiKey`] (reported) when no key is stored, otherwise
    /// as [`Gateway::get`].
    pub async fn post_with_api_key<S: SessionStore, B: Serialize, R: DeserializeOwned>(
        &self,
        session: &SessionManager<S>,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = encode(body)?;
        let value = self
            .send_authenticated(session, endpoint, Method::Post, Some(body), Credential::ApiKey)
            .await?;
        decode_reported(session, endpoint, value)
    }

    /// Unauthenticated `POST` for the login/register endpoints.
    ///
    /// Reports nothing and never touches the session; the auth flow owns
    /// the user-facing outcome.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`], [`ApiError::Decode`], [`ApiError::Status`]
    /// (including 401 for bad credentials), or [`ApiError::Rejected`].
    pub async fn post_public<B: Serialize, R: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<R, ApiError> {
        let body = encode(body)?;
        let request = build_request(self.config.endpoint(endpoint), Method::Post, Some(body));
        log::debug!("POST {endpoint}");
        let response = self.transport.send(request).await.map_err(|err| {
            log::error!("fetch error on {endpoint}: {err}");
            ApiError::Network(err.0)
        })?;
        let value = interpret(&response)?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_authenticated<S: SessionStore>(
        &self,
        session: &SessionManager<S>,
        endpoint: &str,
        method: Method,
        body: Option<Value>,
        credential: Credential,
    ) -> Result<Value, ApiError> {
        let current = session.session();
        let (header, value) = match credential {
            Credential::Bearer => {
                let Some(token) = current.token.filter(|token| !token.is_empty()) else {
                    log::warn!("{endpoint} called without a session token");
                    session.require_login();
                    return Err(ApiError::NotAuthenticated);
                };
                ("Authorization", format!("Bearer {token}"))
            }
            Credential::ApiKey => {
                let Some(key) = current.api_key.filter(|key| !key.is_empty()) else {
                    log::warn!("{endpoint} called without an api key");
                    session.notify(Notification::error(api::MISSING_API_KEY_MESSAGE));
                    return Err(ApiError::MissingApiKey);
                };
                ("X-API-KEY", key)
            }
        };

        let request = build_request(self.config.endpoint(endpoint), method, body).header(header, value);
        log::debug!("{} {endpoint}", method.as_str());

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                log::error!("fetch error on {endpoint}: {err}");
                session.notify(Notification::error(api::NETWORK_ERROR_MESSAGE));
                return Err(ApiError::Network(err.0));
            }
        };

        if response.status == 401 {
            log::warn!("{endpoint} returned 401; clearing session");
            session.expire();
            return Err(ApiError::Unauthorized);
        }

        match interpret(&response) {
            Ok(value) => Ok(value),
            Err(err @ ApiError::Decode(_)) => {
                log::error!("malformed response on {endpoint}: {err}");
                session.notify(Notification::error(api::NETWORK_ERROR_MESSAGE));
                Err(err)
            }
            Err(err) => {
                log::warn!("API error on {endpoint}: {}", err.server_message().unwrap_or(&err.to_string()));
                Err(err)
            }
        }
    }
}

fn build_request(url: String, method: Method, body: Option<Value>) -> HttpRequest {
    let request = HttpRequest::new(method, url).header("Content-Type", "application/json");
    match body {
        Some(body) => request.body(body.to_string()),
        None => request,
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode_reported<S: SessionStore, R: DeserializeOwned>(
    session: &SessionManager<S>,
    endpoint: &str,
    value: Value,
) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        log::error!("unexpected payload shape on {endpoint}: {e}");
        session.notify(Notification::error(api::NETWORK_ERROR_MESSAGE));
        ApiError::Decode(e.to_string())
    })
}

/// Classify a completed, non-401 response.
pub(crate) fn interpret(response: &HttpResponse) -> Result<Value, ApiError> {
    let parsed = serde_json::from_str::<Value>(&response.body);
    if !response.is_success() {
        let message = parsed.ok().as_ref().and_then(|value| {
            error_message(value).or_else(|| value.get("message").and_then(Value::as_str).map(str::to_owned))
        });
        return Err(ApiError::Status { status: response.status, message });
    }
    let value = parsed.map_err(|e| ApiError::Decode(e.to_string()))?;
    match error_message(&value) {
        Some(message) => Err(ApiError::Rejected(message)),
        None => Ok(value),
    }
}

/// The payload's `error` field, when it is set to something truthy.
pub(crate) fn error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) => (!message.is_empty()).then(|| message.clone()),
        other => Some(other.to_string()),
    }
}
