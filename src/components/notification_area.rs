//! Toast stack for session notifications.

use leptos::prelude::*;

use crate::state::notifications::Notifications;

/// Renders every live notification; clicking one dismisses it early.
#[component]
pub fn NotificationArea() -> impl IntoView {
    let notifications = expect_context::<RwSignal<Notifications>>();

    view! {
        <div class="notification-area" aria-live="polite">
            {move || {
                notifications
                    .get()
                    .iter()
                    .cloned()
                    .map(|n| {
                        let id = n.id.clone();
                        view! {
                            <div
                                class=n.kind.css_class()
                                on:click=move |_| {
                                    notifications.update(|q| {
                                        q.dismiss(&id);
                                    });
                                }
                            >
                                {n.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
