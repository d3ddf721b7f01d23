//! Project-generation form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates locally, then calls `Client::generate_project`, which sends the
//! stored API key and reports the outcome. On success the parent gets the
//! response to update the balance and open the code viewer.

use leptos::prelude::*;

use crate::app::ClientHandle;
use crate::net::types::GenerateProjectResponse;
use crate::state::generate::{COMPLEXITIES, GenerateForm, PROJECT_TYPES, STYLES, SelectOption};
use crate::state::notifications::Notification;

#[component]
pub fn GeneratePanel(on_generated: Callback<GenerateProjectResponse>) -> impl IntoView {
    let handle = expect_context::<ClientHandle>();
    let form = RwSignal::new(GenerateForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let client = handle.get();
        let request = match form.with_untracked(GenerateForm::to_request) {
            Ok(request) => request,
            Err(message) => {
                client.session().notify(Notification::error(message));
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let outcome = client.generate_project(&request).await;
            let _ = busy.try_set(false);
            if let Ok(response) = outcome {
                on_generated.run(response);
            }
        });
    };

    view! {
        <section class="panel generate-panel">
            <h2 class="panel__title">"Generate a Project"</h2>
            <form class="generate-form" on:submit=on_submit>
                <label class="generate-form__label">
                    "Project type"
                    <select
                        class="generate-form__select"
                        prop:value=move || form.with(|f| f.project_type.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.project_type = value);
                        }
                    >
                        {select_options(PROJECT_TYPES)}
                    </select>
                </label>
                <label class="generate-form__label">
                    "Complexity"
                    <select
                        class="generate-form__select"
                        prop:value=move || form.with(|f| f.complexity.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.complexity = value);
                        }
                    >
                        {select_options(COMPLEXITIES)}
                    </select>
                </label>
                <label class="generate-form__label">
                    "Style"
                    <select
                        class="generate-form__select"
                        prop:value=move || form.with(|f| f.style.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.style = value);
                        }
                    >
                        {select_options(STYLES)}
                    </select>
                </label>
                <label class="generate-form__label">
                    "Description"
                    <textarea
                        class="generate-form__textarea"
                        rows="4"
                        placeholder="What should the project do?"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.description = value);
                        }
                    ></textarea>
                </label>
                <label class="generate-form__label">
                    "Features (comma or newline separated)"
                    <textarea
                        class="generate-form__textarea"
                        rows="3"
                        placeholder="auth, dark mode"
                        prop:value=move || form.with(|f| f.features.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.features = value);
                        }
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Generating..." } else { "Generate" }}
                </button>
            </form>
        </section>
    }
}

fn select_options(options: &'static [SelectOption]) -> impl IntoView {
    options
        .iter()
        .map(|&(value, label)| view! { <option value=value>{label}</option> })
        .collect::<Vec<_>>()
}
