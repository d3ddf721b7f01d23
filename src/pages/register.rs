//! Registration page: email + username. Success logs the user straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::app::ClientHandle;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let handle = expect_context::<ClientHandle>();
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, username_value) =
            match validate_register_input(&email.get_untracked(), &username.get_untracked()) {
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
            let _ = client.register(&email_value, &username_value).await;
            let _ = busy.try_set(false);
        });
    };

    let on_login = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        handle.get().session().show_login();
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <p class="auth-card__subtitle">"An API key is issued on registration"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already registered? "
                    <a href="#" on:click=on_login>"Login"</a>
                </p>
            </div>
        </div>
    }
}

pub(crate) fn validate_register_input(email: &str, username: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let username = username.trim();
    if email.is_empty() || username.is_empty() {
        return Err("Enter an email and a username.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), username.to_owned()))
}
