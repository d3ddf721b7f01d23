//! Modal dialog asking for a new API key's name.

use leptos::prelude::*;

/// Blank names are ignored; the dialog stays open.
#[component]
pub fn CreateKeyDialog(name: RwSignal<String>, on_cancel: Callback<()>, on_submit: Callback<String>) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let key_name = name.get_untracked();
        let key_name = key_name.trim();
        if key_name.is_empty() {
            return;
        }
        on_submit.run(key_name.to_owned());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create API Key"</h2>
                <label class="dialog__label">
                    "Key Name"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. ci-pipeline"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            } else if ev.key() == "Escape" {
                                ev.prevent_default();
                                on_cancel.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
