//! Client facade: the session manager plus the gateway, and the dashboard
//! calls built on them.
//!
//! ERROR HANDLING
//! ==============
//! Each dashboard call applies its own notification policy on top of the
//! gateway's. Reads (`token_balance`, `usage_history`, `api_keys`) stay
//! silent and let the page show a fallback; writes (`create_api_key`,
//! `generate_project`) report server rejections to the user.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use crate::config::ClientConfig;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::transport::Transport;
use crate::net::types::{
    Ack, ApiKeyList, ApiKeyRecord, CreateApiKeyRequest, GenerateProjectRequest, GenerateProjectResponse,
    ProjectList, ProjectRecord, TokenBalance,
};
use crate::session::SessionManager;
use crate::state::auth::{Session, SessionStore};
use crate::state::notifications::Notification;
use crate::util::in_flight::InFlight;

/// Results of one dashboard refresh; each part fails independently.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardFetch {
    pub balance: Result<i64, ApiError>,
    pub usage: Result<Vec<ProjectRecord>, ApiError>,
    pub keys: Result<Vec<ApiKeyRecord>, ApiError>,
}

pub struct Client<S, T> {
    session: SessionManager<S>,
    gateway: Gateway<T>,
    key_flight: InFlight,
    generate_flight: InFlight,
}

impl<S: SessionStore, T: Transport> Client<S, T> {
    pub fn new(config: ClientConfig, store: S, transport: T) -> Self {
        Self {
            session: SessionManager::new(store),
            gateway: Gateway::new(config, transport),
            key_flight: InFlight::default(),
            generate_flight: InFlight::default(),
        }
    }

    pub fn session(&self) -> &SessionManager<S> {
        &self.session
    }

    pub fn gateway(&self) -> &Gateway<T> {
        &self.gateway
    }

    /// # Errors
    ///
    /// See [`SessionManager::login`].
    pub async fn login(&self, username: &str, key: &str) -> Result<Session, ApiError> {
        self.session.login(&self.gateway, username, key).await
    }

    /// # Errors
    ///
    /// See [`SessionManager::register`].
    pub async fn register(&self, email: &str, username: &str) -> Result<Session, ApiError> {
        self.session.register(&self.gateway, email, username).await
    }

    pub fn logout(&self) {
        self.session.logout();
    }

    /// Current token balance.
    ///
    /// # Errors
    ///
    /// Gateway errors, or [`ApiError::Rejected`] for `success: false`.
    pub async fn token_balance(&self) -> Result<i64, ApiError> {
        let resp: TokenBalance = self.gateway.get(&self.session, api::TOKENS).await?;
        ensure_success(resp.success)?;
        Ok(resp.tokens)
    }

    /// Generated projects, used as the token usage history.
    ///
    /// # Errors
    ///
    /// As [`Client::token_balance`].
    pub async fn usage_history(&self) -> Result<Vec<ProjectRecord>, ApiError> {
        let resp: ProjectList = self.gateway.get(&self.session, api::PROJECTS).await?;
        ensure_success(resp.success)?;
        Ok(resp.projects)
    }

    /// # Errors
    ///
    /// As [`Client::token_balance`].
    pub async fn api_keys(&self) -> Result<Vec<ApiKeyRecord>, ApiError> {
        let resp: ApiKeyList = self.gateway.get(&self.session, api::API_KEYS).await?;
        ensure_success(resp.success)?;
        Ok(resp.api_keys)
    }

    /// Balance, usage history, and keys fetched concurrently.
    pub async fn refresh_dashboard(&self) -> DashboardFetch {
        let (balance, usage, keys) = futures::join!(self.token_balance(), self.usage_history(), self.api_keys());
        DashboardFetch { balance, usage, keys }
    }

    /// Create a named API key and report the outcome.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] for a blank name (nothing sent),
    /// [`ApiError::Busy`] while another creation is pending, otherwise the
    /// gateway error.
    pub async fn create_api_key(&self, name: &str) -> Result<(), ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::Rejected("API key name is required".to_owned()));
        }
        let Some(_creating) = self.key_flight.begin() else {
            return Err(ApiError::Busy);
        };
        let body = CreateApiKeyRequest { name: name.to_owned() };
        let outcome = self
            .gateway
            .post::<_, _, Ack>(&self.session, api::API_KEYS, &body)
            .await
            .and_then(|ack| ensure_success(ack.success));
        match outcome {
            Ok(()) => {
                log::info!("api key created: {name}");
                self.session.notify(Notification::success(api::key_created_message(name)));
                Ok(())
            }
            Err(err) => {
                if !err.is_reported() {
                    self.session
                        .notify(Notification::error(api::key_create_failed_message(err.server_message())));
                }
                Err(err)
            }
        }
    }

    /// Request generated scaffolding, authenticated with the stored API key.
    ///
    /// # Errors
    ///
    /// [`ApiError::Busy`] while another generation is pending, otherwise the
    /// gateway error (all reported to the user).
    pub async fn generate_project(&self, request: &GenerateProjectRequest) -> Result<GenerateProjectResponse, ApiError> {
        let Some(_generating) = self.generate_flight.begin() else {
            return Err(ApiError::Busy);
        };
        let outcome = self
            .gateway
            .post_with_api_key::<_, _, GenerateProjectResponse>(&self.session, api::GENERATE_PROJECT, request)
            .await
            .and_then(|resp| ensure_success(resp.success).map(|()| resp));
        match outcome {
            Ok(resp) => {
                log::info!("generated project {} ({} files)", resp.project.name, resp.project.files.len());
                self.session.notify(Notification::success(api::project_generated_message(
                    &resp.project.name,
                    resp.usage.total_tokens,
                )));
                Ok(resp)
            }
            Err(err) => {
                if !err.is_reported() {
                    self.session
                        .notify(Notification::error(api::generation_failed_message(err.server_message())));
                }
                Err(err)
            }
        }
    }
}

fn ensure_success(success: bool) -> Result<(), ApiError> {
    if success {
        Ok(())
    } else {
        Err(ApiError::Rejected(api::unknown_error()))
    }
}
