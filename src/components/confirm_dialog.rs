//! Modal confirmation dialog with Cancel and Continue buttons.
//!
//! The markup exists only while `ConfirmState` holds a request; resolving the
//! dialog removes it from the document. Title and body are rendered as text
//! nodes, so caller-supplied content is escaped. The dialog takes focus when
//! it opens so Escape reaches its key handler.

#[cfg(test)]
#[path = "confirm_dialog_test.rs"]
mod confirm_dialog_test;

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::state::confirm::{ConfirmChoice, ConfirmState, resolve_confirm};

/// Keys that dismiss the dialog like the Cancel button.
fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[component]
pub fn ConfirmDialog(confirm: RwSignal<ConfirmState>) -> impl IntoView {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let ok_label = config.confirm_ok_label;
    let cancel_label = config.confirm_cancel_label;

    let on_continue = Callback::new(move |()| resolve_confirm(confirm, ConfirmChoice::Continue));
    let on_cancel = Callback::new(move |()| resolve_confirm(confirm, ConfirmChoice::Cancel));
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_cancel.run(());
        }
    });

    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = dialog_ref.get() {
            let _ = el.focus();
        }
    });

    move || {
        let request = confirm.with(|s| s.active().cloned())?;
        let ok_label = ok_label.clone();
        let cancel_label = cancel_label.clone();
        Some(view! {
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div
                    class="modal"
                    id="div-confirm"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="div-confirm-title"
                    tabindex="-1"
                    node_ref=dialog_ref
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                >
                    <div class="modal-dialog">
                        <div class="modal-content">
                            <div class="modal-header">
                                <button type="button" class="close" title="Close" on:click=move |_| on_cancel.run(())>
                                    "×"
                                </button>
                                <h4 class="modal-title" id="div-confirm-title">{request.title}</h4>
                            </div>
                            <div class="modal-body">{request.text}</div>
                            <div class="modal-footer">
                                <button type="button" class="btn btn-default btn-cancel" on:click=move |_| on_cancel.run(())>
                                    {cancel_label}
                                </button>
                                <button type="button" class="btn btn-primary btn-continue" autofocus=true on:click=move |_| on_continue.run(())>
                                    {ok_label}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        })
    }
}
