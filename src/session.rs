//! Session manager: owns the persisted session and the active view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The manager is presentation-agnostic. The UI subscribes to
//! [`SessionEvent`]s (route decisions and notifications) and mirrors them
//! into signals; the gateway calls back into [`SessionManager::expire`] and
//! [`SessionManager::require_login`] so 401 handling stays in one place.
//!
//! TRADE-OFFS
//! ==========
//! Interior mutability (`Cell`/`RefCell`) instead of `&mut self`: handlers on
//! the single-threaded event loop share one manager through `Rc` and may have
//! several requests pending at once. No borrow is held across an `.await`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::transport::Transport;
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::state::auth::{Session, SessionStore};
use crate::state::notifications::Notification;
use crate::state::view::{View, ViewRouter};
use crate::util::in_flight::InFlight;

/// Something the view layer should react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A routing decision was made. Emitted on every decision, including
    /// re-routes to the current view, so a dashboard reload can hang off it.
    Routed(View),
    /// A message for the notification area.
    Notified(Notification),
}

type Listener = Rc<dyn Fn(&SessionEvent)>;

/// Wording for one of the two auth flows.
struct AuthFlow {
    action: &'static str,
    success: &'static str,
    network: &'static str,
    failed: fn(Option<&str>) -> String,
}

const LOGIN_FLOW: AuthFlow = AuthFlow {
    action: "login",
    success: api::LOGIN_SUCCESS_MESSAGE,
    network: api::LOGIN_NETWORK_MESSAGE,
    failed: api::login_failed_message,
};

const REGISTER_FLOW: AuthFlow = AuthFlow {
    action: "registration",
    success: api::REGISTER_SUCCESS_MESSAGE,
    network: api::REGISTER_NETWORK_MESSAGE,
    failed: api::register_failed_message,
};

pub struct SessionManager<S> {
    store: S,
    router: Cell<ViewRouter>,
    listeners: RefCell<Vec<Listener>>,
    auth_flight: InFlight,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            router: Cell::new(ViewRouter::default()),
            listeners: RefCell::new(Vec::new()),
            auth_flight: InFlight::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Snapshot of the persisted session.
    pub fn session(&self) -> Session {
        self.store.load()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn view(&self) -> View {
        self.router.get().current()
    }

    /// Register a listener for routing decisions and notifications.
    pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn notify(&self, notification: Notification) {
        self.emit(&SessionEvent::Notified(notification));
    }

    /// Dashboard when a token is stored, login otherwise.
    pub fn route_by_auth_state(&self) -> View {
        let mut router = self.router.get();
        let view = router.route(self.is_authenticated());
        self.set_router(router);
        view
    }

    /// Login → register link. No-op from other views.
    pub fn show_register(&self) -> bool {
        let mut router = self.router.get();
        let changed = router.show_register();
        if changed {
            self.set_router(router);
        }
        changed
    }

    /// Register → login link. No-op from other views.
    pub fn show_login(&self) -> bool {
        let mut router = self.router.get();
        let changed = router.show_login();
        if changed {
            self.set_router(router);
        }
        changed
    }

    /// Clear the whole session and return to login.
    pub fn logout(&self) {
        self.store.clear();
        log::info!("logged out");
        self.notify(Notification::success(api::LOGOUT_MESSAGE));
        self.route_by_auth_state();
    }

    /// 401 path: clear the session and force the login view.
    ///
    /// Only the first 401 of a burst reports; parallel requests that fail
    /// after the session is already gone just re-route.
    pub fn expire(&self) {
        let had_token = self.is_authenticated();
        self.store.clear();
        if had_token {
            log::info!("session cleared after 401");
            self.notify(Notification::error(api::SESSION_EXPIRED_MESSAGE));
        }
        let mut router = self.router.get();
        router.expire();
        self.set_router(router);
    }

    /// Authenticated call attempted with no token stored.
    pub fn require_login(&self) {
        self.notify(Notification::error(api::AUTH_REQUIRED_MESSAGE));
        self.route_by_auth_state();
    }

    /// Exchange a username and API key for a session.
    ///
    /// # Errors
    ///
    /// [`ApiError::Busy`] if an auth request is already pending (nothing is
    /// sent); otherwise the gateway error. Every failure except `Busy` is
    /// reported with a notification and leaves session and view unchanged.
    pub async fn login<T: Transport>(&self, gateway: &Gateway<T>, username: &str, key: &str) -> Result<Session, ApiError> {
        let Some(_submitting) = self.auth_flight.begin() else {
            log::debug!("login ignored; auth request already in flight");
            return Err(ApiError::Busy);
        };
        let body = LoginRequest { username: username.to_owned(), key: key.to_owned() };
        let outcome = gateway.post_public::<_, AuthResponse>(api::LOGIN, &body).await;
        self.complete_auth(&LOGIN_FLOW, outcome)
    }

    /// Create an account; success leaves the user logged in.
    ///
    /// # Errors
    ///
    /// Same contract as [`SessionManager::login`].
    pub async fn register<T: Transport>(&self, gateway: &Gateway<T>, email: &str, username: &str) -> Result<Session, ApiError> {
        let Some(_submitting) = self.auth_flight.begin() else {
            log::debug!("registration ignored; auth request already in flight");
            return Err(ApiError::Busy);
        };
        let body = RegisterRequest { email: email.to_owned(), username: username.to_owned() };
        let outcome = gateway.post_public::<_, AuthResponse>(api::REGISTER, &body).await;
        self.complete_auth(&REGISTER_FLOW, outcome)
    }

    fn complete_auth(&self, flow: &AuthFlow, outcome: Result<AuthResponse, ApiError>) -> Result<Session, ApiError> {
        let response = match outcome {
            Ok(response) => response,
            Err(err @ (ApiError::Network(_) | ApiError::Decode(_))) => {
                log::error!("{} error: {err}", flow.action);
                self.notify(Notification::error(flow.network));
                return Err(err);
            }
            Err(err) => {
                log::warn!("{} rejected: {err}", flow.action);
                self.notify(Notification::error((flow.failed)(err.server_message())));
                return Err(err);
            }
        };

        match session_from_auth(response) {
            Ok(session) => {
                self.store.save(&session);
                log::info!("{} succeeded for {}", flow.action, session.username.as_deref().unwrap_or("?"));
                self.notify(Notification::success(flow.success));
                self.route_by_auth_state();
                Ok(session)
            }
            Err(server) => {
                log::warn!("{} rejected: {}", flow.action, server.as_deref().unwrap_or("no message"));
                self.notify(Notification::error((flow.failed)(server.as_deref())));
                Err(ApiError::Rejected(server.unwrap_or_else(api::unknown_error)))
            }
        }
    }

    fn set_router(&self, router: ViewRouter) {
        self.router.set(router);
        self.emit(&SessionEvent::Routed(router.current()));
    }

    fn emit(&self, event: &SessionEvent) {
        // Snapshot so a listener may subscribe without a re-entrant borrow.
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(event);
        }
    }
}

/// Build the full session from an auth response, or return the server's
/// error message (if any). Nothing is stored unless every field is present.
fn session_from_auth(response: AuthResponse) -> Result<Session, Option<String>> {
    match response {
        AuthResponse { success: true, user: Some(user), api_key: Some(api_key), .. }
            if !user.id.is_empty() && !api_key.is_empty() =>
        {
            Ok(Session {
                token: Some(user.id),
                api_key: Some(api_key),
                username: Some(user.username),
                email: user.email,
            })
        }
        AuthResponse { error, .. } => Err(error.filter(|message| !message.is_empty())),
    }
}
