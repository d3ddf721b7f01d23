//! Dashboard page: profile, balance, usage history, API keys, and the
//! project generator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only while the session manager routes to the dashboard. Data is
//! (re)loaded whenever [`DashboardEpoch`] changes, which happens on every
//! route decision that lands here. The three reads run concurrently and fill
//! their sections independently.

use leptos::prelude::*;

use crate::app::{AppClient, ClientHandle, DashboardEpoch};
use crate::components::api_key_list::ApiKeyList;
use crate::components::code_viewer_modal::CodeViewerModal;
use crate::components::create_key_dialog::CreateKeyDialog;
use crate::components::generate_panel::GeneratePanel;
use crate::components::usage_history::UsageHistory;
use crate::net::types::GenerateProjectResponse;
use crate::state::dashboard::{DashboardState, NOT_AVAILABLE};
use crate::state::generate::CodeViewer;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let handle = expect_context::<ClientHandle>();
    let epoch = expect_context::<DashboardEpoch>();

    let dashboard = RwSignal::new(DashboardState::default());
    let viewer = RwSignal::new(None::<CodeViewer>);

    Effect::new(move || {
        epoch.0.track();
        load_dashboard(handle, dashboard);
    });

    // Create-key dialog state.
    let show_create = RwSignal::new(false);
    let new_key_name = RwSignal::new(String::new());

    let on_create = Callback::new(move |()| {
        new_key_name.set(String::new());
        show_create.set(true);
    });
    let on_create_cancel = Callback::new(move |()| show_create.set(false));
    let on_create_submit = Callback::new(move |name: String| {
        show_create.set(false);
        let client = handle.get();
        leptos::task::spawn_local(async move {
            if client.create_api_key(&name).await.is_ok() {
                reload_keys(&client, dashboard).await;
            }
        });
    });

    let on_generated = Callback::new(move |response: GenerateProjectResponse| {
        dashboard.update(|d| d.set_balance(Ok(response.usage.remaining_tokens)));
        viewer.set(Some(CodeViewer::new(&response.project)));
        let client = handle.get();
        leptos::task::spawn_local(async move {
            reload_usage(&client, dashboard).await;
        });
    });

    let on_logout = move |_| handle.get().logout();

    let username = move || dashboard.with(|d| d.profile.as_ref().map(|p| p.username.clone()));
    let email = move || dashboard.with(|d| d.profile.as_ref().map(|p| p.email.clone()));
    let balance = move || dashboard.with(DashboardState::balance_label);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Project Generator"</span>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__balance" title="Token balance">
                    {balance}
                    " tokens"
                </span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <div class="dashboard-page__grid">
                <section class="panel profile">
                    <h2 class="panel__title">"Profile"</h2>
                    <div class="profile__row">
                        <span class="profile__label">"Username"</span>
                        <span class="profile__value">
                            {move || username().unwrap_or_else(|| NOT_AVAILABLE.to_owned())}
                        </span>
                    </div>
                    <div class="profile__row">
                        <span class="profile__label">"Email"</span>
                        <span class="profile__value">
                            {move || email().unwrap_or_else(|| NOT_AVAILABLE.to_owned())}
                        </span>
                    </div>
                    <div class="profile__row">
                        <span class="profile__label">"Token balance"</span>
                        <span class="profile__value">{balance}</span>
                    </div>
                </section>

                <GeneratePanel on_generated=on_generated/>
                <UsageHistory dashboard=dashboard/>
                <ApiKeyList dashboard=dashboard on_create=on_create/>
            </div>

            <Show when=move || show_create.get()>
                <CreateKeyDialog name=new_key_name on_cancel=on_create_cancel on_submit=on_create_submit/>
            </Show>
            <Show when=move || viewer.with(Option::is_some)>
                <CodeViewerModal viewer=viewer/>
            </Show>
        </div>
    }
}

fn load_dashboard(handle: ClientHandle, dashboard: RwSignal<DashboardState>) {
    let client = handle.get();
    dashboard.set(DashboardState::loading(&client.session().session()));
    leptos::task::spawn_local(async move {
        let fetch = client.refresh_dashboard().await;
        let api_key = client.session().session().api_key;
        let _ = dashboard.try_update(|d| d.apply_fetch(fetch, api_key.as_deref()));
    });
}

async fn reload_keys(client: &AppClient, dashboard: RwSignal<DashboardState>) {
    let keys = client.api_keys().await;
    let api_key = client.session().session().api_key;
    let _ = dashboard.try_update(|d| d.set_keys(keys, api_key.as_deref()));
}

async fn reload_usage(client: &AppClient, dashboard: RwSignal<DashboardState>) {
    let usage = client.usage_history().await;
    let _ = dashboard.try_update(|d| d.set_usage(usage));
}
