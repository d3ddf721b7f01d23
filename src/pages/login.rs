//! Login page: username + API key.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::ClientHandle;

const LOGIN_INPUT_MESSAGE: &str = "Enter your username and API key.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let handle = expect_context::<ClientHandle>();
    let username = RwSignal::new(String::new());
    let key = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (username_value, key_value) = match validate_login_input(&username.get_untracked(), &key.get_untracked()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        busy.set(true);

        let client = handle.get();
        leptos::task::spawn_local(async move {
            // Outcome is reported through session notifications; success
            // unmounts this page.
            let _ = client.login(&username_value, &key_value).await;
            let _ = busy.try_set(false);
        });
    };

    let on_register = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        handle.get().session().show_register();
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Project Generator"</h1>
                <p class="auth-card__subtitle">"Log in with your API key"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="API key"
                        autocomplete="current-password"
                        prop:value=move || key.get()
                        on:input=move |ev| key.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "No account? "
                    <a href="#" on:click=on_register>"Register"</a>
                </p>
            </div>
        </div>
    }
}

/// Trim both fields and require each to be non-empty.
pub(crate) fn validate_login_input(username: &str, key: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    let key = key.trim();
    if username.is_empty() || key.is_empty() {
        return Err(LOGIN_INPUT_MESSAGE);
    }
    Ok((username.to_owned(), key.to_owned()))
}
