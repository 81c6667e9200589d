//! Reactive UI state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `form` backs the error banner and submit button of the page's form, and
//! `confirm` backs the single confirmation dialog.

pub mod confirm;
pub mod form;

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::net::api::ApiClient;
use confirm::ConfirmState;
use form::FormState;

/// Signals installed by [`provide_ui_context`].
#[derive(Clone, Copy)]
pub struct UiSignals {
    pub form: RwSignal<FormState>,
    pub confirm: RwSignal<ConfirmState>,
}

/// Provide the config, an API client, and fresh form/confirm signals to child components.
pub fn provide_ui_context(config: UiConfig) -> UiSignals {
    let signals = UiSignals {
        form: RwSignal::new(FormState::default()),
        confirm: RwSignal::new(ConfirmState::default()),
    };
    provide_context(ApiClient::from_config(&config));
    provide_context(config);
    provide_context(signals.form);
    provide_context(signals.confirm);
    signals
}
