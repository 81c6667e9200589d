//! Submit button disabled while the form's request is in flight.

use leptos::prelude::*;

use crate::state::form::FormState;

#[component]
pub fn SubmitButton(form: RwSignal<FormState>, children: Children) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary" disabled=move || form.with(|f| f.loading)>
            {children()}
        </button>
    }
}
