//! Test doubles: a scripted transport and event recording.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use async_trait::async_trait;

use crate::client::Client;
use crate::config::ClientConfig;
use crate::net::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::session::{SessionEvent, SessionManager};
use crate::state::auth::{MemoryStore, Session, SessionStore};
use crate::state::notifications::Notification;
use crate::state::view::View;

pub(crate) const BASE_URL: &str = "http://backend.test";

/// Replays queued responses in order and records every request.
///
/// Each `send` yields once before answering so concurrent callers really
/// interleave under `futures::join!`.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.respond_raw(status, &body.to_string())
    }

    pub(crate) fn respond_raw(self, status: u16, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_owned())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        YieldNow::default().await;
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_owned())))
    }
}

#[derive(Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

pub(crate) fn logged_in_session() -> Session {
    Session {
        token: Some("u1".to_owned()),
        api_key: Some("ak1".to_owned()),
        username: Some("bob".to_owned()),
        email: Some("b@x.com".to_owned()),
    }
}

pub(crate) fn client(transport: ScriptedTransport) -> Client<MemoryStore, ScriptedTransport> {
    Client::new(ClientConfig::new(BASE_URL), MemoryStore::default(), transport)
}

/// Client with a stored session, already routed to the dashboard.
pub(crate) fn logged_in_client(transport: ScriptedTransport) -> Client<MemoryStore, ScriptedTransport> {
    let client = Client::new(
        ClientConfig::new(BASE_URL),
        MemoryStore::with_session(&logged_in_session()),
        transport,
    );
    client.session().route_by_auth_state();
    client
}

/// Collects every event the manager emits from now on.
pub(crate) struct EventLog(Rc<RefCell<Vec<SessionEvent>>>);

impl EventLog {
    pub(crate) fn attach<S: SessionStore>(session: &SessionManager<S>) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        session.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        Self(events)
    }

    pub(crate) fn notifications(&self) -> Vec<Notification> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SessionEvent::Notified(n) => Some(n.clone()),
                SessionEvent::Routed(_) => None,
            })
            .collect()
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.message).collect()
    }

    pub(crate) fn routes(&self) -> Vec<View> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SessionEvent::Routed(view) => Some(*view),
                SessionEvent::Notified(_) => None,
            })
            .collect()
    }
}
