//! Submit-form state: the error banner text and the submit button's loading flag.
//!
//! DESIGN
//! ======
//! Each form owns one `RwSignal<FormState>` that the banner and submit button
//! components read. Handlers update the signal instead of querying the DOM.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::future::Future;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::api::ApiResult;
use crate::net::types::ErrorValue;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    /// Banner text; `None` hides the banner.
    pub error: Option<String>,
    /// While set, the submit button is disabled.
    pub loading: bool,
}

impl FormState {
    /// Show `err` in the banner, or clear and hide it when `err` is absent or falsy.
    pub fn show_error(&mut self, err: Option<&ErrorValue>) {
        self.error = err.filter(|e| e.is_truthy()).map(ErrorValue::display_text);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn banner_visible(&self) -> bool {
        self.error.is_some()
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    pub fn stop_loading(&mut self) {
        self.loading = false;
    }

    /// Re-enable the submit button and show the error of a failed call.
    pub fn finish(&mut self, result: &ApiResult) {
        self.stop_loading();
        match result {
            Ok(_) => self.clear_error(),
            Err(e) => self.show_error(Some(&e.error_value())),
        }
    }
}

/// Run one API call on behalf of a form.
///
/// The banner is cleared and the button disabled until `request` resolves;
/// `on_success` then receives the payload.
pub fn submit_form<F, S>(form: RwSignal<FormState>, request: F, on_success: S)
where
    F: Future<Output = ApiResult> + 'static,
    S: FnOnce(Value) + 'static,
{
    form.update(|f| {
        f.clear_error();
        f.start_loading();
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = request.await;
        form.update(|f| f.finish(&result));
        if let Ok(payload) = result {
            on_success(payload);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, on_success);
        form.update(FormState::stop_loading);
    }
}
