//! Token usage history list.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::dashboard::{DashboardState, USAGE_EMPTY, USAGE_LOADING, UsageRow, list_placeholder};

#[component]
pub fn UsageHistory(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <section class="panel usage-history">
            <h2 class="panel__title">"Token Usage History"</h2>
            <div class="panel__list">
                {move || {
                    dashboard.with(|state| match list_placeholder(&state.usage, USAGE_LOADING, USAGE_EMPTY) {
                        Some(text) => view! { <p class="panel__empty">{text}</p> }.into_any(),
                        None => {
                            let rows = state.usage.ready().cloned().unwrap_or_default();
                            rows.into_iter().map(usage_row).collect::<Vec<_>>().into_any()
                        }
                    })
                }}
            </div>
        </section>
    }
}

fn usage_row(row: UsageRow) -> impl IntoView {
    view! {
        <div class="usage-row" data-id=row.id>
            <div>
                <p class="usage-row__name">{row.name}</p>
                <p class="usage-row__meta">"Type: " {row.kind} " | Date: " {row.date}</p>
            </div>
            <div class="usage-row__tokens">
                <span class="badge badge--spent">{row.total}</span>
                <p class="usage-row__split">{row.split}</p>
            </div>
        </div>
    }
}
