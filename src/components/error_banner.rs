//! Page-level error banner.

use leptos::prelude::*;

use crate::state::form::FormState;

/// `div.alert-danger` showing the form's current error; hidden when there is none.
#[component]
pub fn ErrorBanner(form: RwSignal<FormState>) -> impl IntoView {
    let class = move || {
        if form.with(FormState::banner_visible) {
            "alert alert-danger"
        } else {
            "alert alert-danger hidden"
        }
    };
    let text = move || form.with(|f| f.error.clone().unwrap_or_default());

    view! {
        <div class=class role="alert">
            {text}
        </div>
    }
}
