//! API key list with the create-key action.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::dashboard::{DashboardState, KEYS_EMPTY, KEYS_LOADING, KeyRow, list_placeholder};

/// Key rows plus a "Create" button enabled only with a positive balance.
#[component]
pub fn ApiKeyList(dashboard: RwSignal<DashboardState>, on_create: Callback<()>) -> impl IntoView {
    view! {
        <section class="panel api-keys">
            <div class="panel__header">
                <h2 class="panel__title">"API Keys"</h2>
                <button
                    class="btn btn--primary"
                    disabled=move || !dashboard.with(DashboardState::can_create_key)
                    on:click=move |_| on_create.run(())
                >
                    "+ Create Key"
                </button>
            </div>
            <div class="panel__list">
                {move || {
                    dashboard.with(|state| match list_placeholder(&state.keys, KEYS_LOADING, KEYS_EMPTY) {
                        Some(text) => view! { <p class="panel__empty">{text}</p> }.into_any(),
                        None => {
                            let rows = state.keys.ready().cloned().unwrap_or_default();
                            rows.into_iter().map(key_row).collect::<Vec<_>>().into_any()
                        }
                    })
                }}
            </div>
        </section>
    }
}

fn key_row(row: KeyRow) -> impl IntoView {
    let badge = if row.active { "badge badge--active" } else { "badge badge--inactive" };
    let status = row.status_label();
    view! {
        <div class="key-row">
            <div class="key-row__header">
                <p class="key-row__name">{row.name}</p>
                <span class=badge>{status}</span>
            </div>
            <p class="key-row__meta">
                "Created: " {row.created} " | Tokens Used: " {row.tokens} " | Est. Cost: " {row.cost}
            </p>
            <p class="key-row__key">
                "Key: " <span class="mono">{row.key_text}</span>
            </p>
        </div>
    }
}
