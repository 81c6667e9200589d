//! Confirmation dialog lifecycle.
//!
//! A dialog is either shown (`active` is `Some`) or destroyed. Resolving it
//! always hides it first and then hands back the action to run, so an action
//! that opens another dialog sees a clean state.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

/// Callback attached to a dialog button.
pub type ConfirmAction = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmError {
    #[error("a confirmation dialog is already shown")]
    AlreadyShown,
    #[error("confirmation dialog state was disposed")]
    Disposed,
}

/// How the user closed the dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmChoice {
    Continue,
    /// Cancel button, close control, backdrop click, or Escape.
    Cancel,
}

#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub text: String,
    pub on_ok: Option<ConfirmAction>,
    pub on_cancel: Option<ConfirmAction>,
}

impl ConfirmRequest {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            on_ok: None,
            on_cancel: None,
        }
    }

    #[must_use]
    pub fn on_ok(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_ok = Some(Arc::new(action));
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_cancel = Some(Arc::new(action));
        self
    }
}

impl fmt::Debug for ConfirmRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmRequest")
            .field("title", &self.title)
            .field("text", &self.text)
            .field("on_ok", &self.on_ok.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConfirmState {
    active: Option<ConfirmRequest>,
}

impl ConfirmState {
    /// Show `request`.
    ///
    /// # Errors
    ///
    /// Returns `ConfirmError::AlreadyShown` while another dialog is open; the
    /// open dialog is left untouched.
    pub fn show_confirm(&mut self, request: ConfirmRequest) -> Result<(), ConfirmError> {
        if self.active.is_some() {
            return Err(ConfirmError::AlreadyShown);
        }
        self.active = Some(request);
        Ok(())
    }

    pub fn is_shown(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ConfirmRequest> {
        self.active.as_ref()
    }

    /// Hide the dialog and return the action bound to `choice`.
    pub fn resolve(&mut self, choice: ConfirmChoice) -> Option<ConfirmAction> {
        let request = self.active.take()?;
        match choice {
            ConfirmChoice::Continue => request.on_ok,
            ConfirmChoice::Cancel => request.on_cancel,
        }
    }
}

/// Open a dialog through the shared signal.
///
/// # Errors
///
/// See [`ConfirmState::show_confirm`].
pub fn show_confirm(confirm: RwSignal<ConfirmState>, request: ConfirmRequest) -> Result<(), ConfirmError> {
    let result = confirm
        .try_update(|s| s.show_confirm(request))
        .unwrap_or(Err(ConfirmError::Disposed));
    if let Err(e) = &result {
        leptos::logging::warn!("confirm dialog rejected: {e}");
    }
    result
}

/// Close the dialog through the shared signal, then run the chosen action.
pub fn resolve_confirm(confirm: RwSignal<ConfirmState>, choice: ConfirmChoice) {
    if let Some(action) = confirm.try_update(|s| s.resolve(choice)).flatten() {
        action();
    }
}
