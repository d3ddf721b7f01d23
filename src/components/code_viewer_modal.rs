//! Modal showing generated files, one tab per file.
//!
//! The dialog takes keyboard focus when it opens so Escape closes it without
//! the user clicking into it first.

#[cfg(test)]
#[path = "code_viewer_modal_test.rs"]
mod code_viewer_modal_test;

use leptos::prelude::*;

use crate::state::generate::CodeViewer;

/// Closing sets `viewer` back to `None`.
#[component]
pub fn CodeViewerModal(viewer: RwSignal<Option<CodeViewer>>) -> impl IntoView {
    let copied = RwSignal::new(false);
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        #[cfg(feature = "csr")]
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.focus();
        }
    });

    let close = move || viewer.set(None);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if closes_dialog(&ev.key()) {
            ev.prevent_default();
            close();
        }
    });

    let on_copy = move |_| {
        #[cfg(feature = "csr")]
        {
            let text = viewer.with_untracked(|v| v.as_ref().and_then(CodeViewer::active_contents).map(str::to_owned));
            if let (Some(text), Some(window)) = (text, web_sys::window()) {
                let _ = window.navigator().clipboard().write_text(&text);
                copied.set(true);
            }
        }
    };

    let title = move || viewer.with(|v| v.as_ref().map(|v| v.project_name.clone()).unwrap_or_default());
    let tabs = move || {
        viewer.with(|v| {
            v.as_ref()
                .map(|v| {
                    let active = v.active_index();
                    v.tabs()
                        .enumerate()
                        .map(|(index, name)| (index, name.to_owned(), index == active))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };
    let contents = move || {
        viewer.with(|v| {
            v.as_ref()
                .and_then(CodeViewer::active_contents)
                .unwrap_or("No files were generated.")
                .to_owned()
        })
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--code"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="code-viewer__header">
                    <h2>{title}</h2>
                    <button class="btn code-viewer__close" on:click=move |_| close() title="Close">
                        "×"
                    </button>
                </div>
                <div class="code-viewer__tabs" role="tablist">
                    {move || {
                        tabs()
                            .into_iter()
                            .map(|(index, name, active)| {
                                let class = if active { "code-viewer__tab code-viewer__tab--active" } else { "code-viewer__tab" };
                                view! {
                                    <button
                                        class=class
                                        role="tab"
                                        on:click=move |_| {
                                            viewer.update(|v| {
                                                if let Some(v) = v.as_mut() {
                                                    v.select(index);
                                                }
                                            });
                                            copied.set(false);
                                        }
                                    >
                                        {name}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <pre class="code-viewer__body"><code>{contents}</code></pre>
                <div class="dialog__actions">
                    <button class="btn" on:click=on_copy title="Copy file">
                        {move || if copied.get() { "Copied" } else { "Copy" }}
                    </button>
                    <button class="btn btn--primary" on:click=move |_| close()>"Close"</button>
                </div>
            </div>
        </div>
    }
}

/// Keys that dismiss the viewer while it has focus.
fn closes_dialog(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
