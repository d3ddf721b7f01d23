//! Root application component and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the one [`Client`] for the page, mirrors its [`SessionEvent`]s into
//! signals, and swaps the top-level page whenever the session manager routes.
//! Pages reach the client through the [`ClientHandle`] context.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::client::Client;
use crate::components::notification_area::NotificationArea;
use crate::config::ClientConfig;
use crate::net::transport::FetchTransport;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::session::SessionEvent;
use crate::state::notifications::{NOTIFICATION_TTL, Notifications};
use crate::state::view::View;
use crate::util::clock::now_ms;
use crate::util::storage::BrowserStore;

/// The concrete client used in the browser.
pub type AppClient = Client<BrowserStore, FetchTransport>;

/// Copyable handle to the page's client, provided as context.
#[derive(Clone, Copy)]
pub struct ClientHandle(StoredValue<Rc<AppClient>, LocalStorage>);

impl ClientHandle {
    pub fn get(self) -> Rc<AppClient> {
        self.0.get_value()
    }
}

/// Bumped on every route to the dashboard; the dashboard reloads its data
/// whenever it changes.
#[derive(Clone, Copy)]
pub struct DashboardEpoch(pub RwSignal<u64>);

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    if config.backend_url.is_empty() {
        log::info!("backend: same-origin");
    } else {
        log::info!("backend: {}", config.backend_url);
    }
    let client = Rc::new(Client::new(config, BrowserStore, FetchTransport));

    let active_view = RwSignal::new(View::default());
    let notifications = RwSignal::new(Notifications::default());
    let epoch = DashboardEpoch(RwSignal::new(0));

    client.session().subscribe(move |event| match event {
        SessionEvent::Routed(next) => {
            active_view.set(*next);
            if *next == View::Dashboard {
                epoch.0.update(|n| *n += 1);
            }
        }
        SessionEvent::Notified(notification) => {
            notifications.update(|q| q.push(notification.clone(), now_ms()));
            schedule_expiry(notifications, notification.id.clone());
        }
    });

    provide_context(ClientHandle(StoredValue::new_local(Rc::clone(&client))));
    provide_context(notifications);
    provide_context(epoch);

    client.session().route_by_auth_state();

    // Re-render only on an actual page change; re-routes to the same page
    // are handled through the epoch.
    let current = Memo::new(move |_| active_view.get());

    view! {
        <Stylesheet id="projectgen" href="/style.css"/>
        <Title text="Project Generator"/>

        <NotificationArea/>
        {move || match current.get() {
            View::Login => view! { <LoginPage/> }.into_any(),
            View::Register => view! { <RegisterPage/> }.into_any(),
            View::Dashboard => view! { <DashboardPage/> }.into_any(),
        }}
    }
}

/// Remove the notification `id` once it has been shown for its TTL.
fn schedule_expiry(notifications: RwSignal<Notifications>, id: String) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(NOTIFICATION_TTL).await;
        let _ = notifications.try_update(|q| q.expire(&id, now_ms()));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (notifications, id, NOTIFICATION_TTL);
    }
}
