use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use leptos::prelude::*;

fn counted_request(ok: &Arc<AtomicUsize>, cancel: &Arc<AtomicUsize>) -> ConfirmRequest {
    let ok = Arc::clone(ok);
    let cancel = Arc::clone(cancel);
    ConfirmRequest::new("Delete blog", "This cannot be undone.")
        .on_ok(move || {
            ok.fetch_add(1, Ordering::SeqCst);
        })
        .on_cancel(move || {
            cancel.fetch_add(1, Ordering::SeqCst);
        })
}

fn run(action: Option<ConfirmAction>) {
    if let Some(action) = action {
        action();
    }
}

#[test]
fn confirm_state_default_is_destroyed() {
    let state = ConfirmState::default();
    assert!(!state.is_shown());
    assert!(state.active().is_none());
}

#[test]
fn show_confirm_keeps_title_and_text() {
    let mut state = ConfirmState::default();
    state.show_confirm(ConfirmRequest::new("<b>Title</b>", "Body & more")).unwrap();
    let active = state.active().unwrap();
    assert_eq!(active.title, "<b>Title</b>");
    assert_eq!(active.text, "Body & more");
}

#[test]
fn continue_destroys_dialog_and_runs_ok_once() {
    let ok = Arc::new(AtomicUsize::new(0));
    let cancel = Arc::new(AtomicUsize::new(0));
    let mut state = ConfirmState::default();
    state.show_confirm(counted_request(&ok, &cancel)).unwrap();

    let action = state.resolve(ConfirmChoice::Continue);
    assert!(!state.is_shown());
    run(action);

    assert_eq!(ok.load(Ordering::SeqCst), 1);
    assert_eq!(cancel.load(Ordering::SeqCst), 0);
}

#[test]
fn cancel_destroys_dialog_and_runs_cancel_once() {
    let ok = Arc::new(AtomicUsize::new(0));
    let cancel = Arc::new(AtomicUsize::new(0));
    let mut state = ConfirmState::default();
    state.show_confirm(counted_request(&ok, &cancel)).unwrap();

    run(state.resolve(ConfirmChoice::Cancel));

    assert!(!state.is_shown());
    assert_eq!(ok.load(Ordering::SeqCst), 0);
    assert_eq!(cancel.load(Ordering::SeqCst), 1);
}

#[test]
fn resolving_twice_runs_nothing_the_second_time() {
    let ok = Arc::new(AtomicUsize::new(0));
    let cancel = Arc::new(AtomicUsize::new(0));
    let mut state = ConfirmState::default();
    state.show_confirm(counted_request(&ok, &cancel)).unwrap();

    run(state.resolve(ConfirmChoice::Continue));
    run(state.resolve(ConfirmChoice::Continue));
    run(state.resolve(ConfirmChoice::Cancel));

    assert_eq!(ok.load(Ordering::SeqCst), 1);
    assert_eq!(cancel.load(Ordering::SeqCst), 0);
}

#[test]
fn missing_actions_still_destroy_dialog() {
    let mut state = ConfirmState::default();
    state.show_confirm(ConfirmRequest::new("Title", "Text")).unwrap();
    assert!(state.resolve(ConfirmChoice::Continue).is_none());
    assert!(!state.is_shown());
}

#[test]
fn second_dialog_is_rejected_while_shown() {
    let mut state = ConfirmState::default();
    state.show_confirm(ConfirmRequest::new("First", "one")).unwrap();
    let err = state.show_confirm(ConfirmRequest::new("Second", "two")).unwrap_err();
    assert_eq!(err, ConfirmError::AlreadyShown);
    assert_eq!(state.active().unwrap().title, "First");
}

#[test]
fn new_dialog_allowed_after_previous_destroyed() {
    let mut state = ConfirmState::default();
    state.show_confirm(ConfirmRequest::new("First", "one")).unwrap();
    state.resolve(ConfirmChoice::Cancel);
    assert!(state.show_confirm(ConfirmRequest::new("Second", "two")).is_ok());
}

#[test]
fn debug_output_hides_closures() {
    let request = ConfirmRequest::new("T", "B").on_ok(|| {});
    let text = format!("{request:?}");
    assert!(text.contains("on_ok: true"));
    assert!(text.contains("on_cancel: false"));
}

// =============================================================
// Signal helpers
// =============================================================

#[test]
fn resolve_confirm_continue_hides_and_runs_ok_once() {
    let ok = Arc::new(AtomicUsize::new(0));
    let cancel = Arc::new(AtomicUsize::new(0));
    let confirm = RwSignal::new(ConfirmState::default());
    show_confirm(confirm, counted_request(&ok, &cancel)).unwrap();
    assert!(confirm.with_untracked(ConfirmState::is_shown));

    resolve_confirm(confirm, ConfirmChoice::Continue);

    assert!(!confirm.with_untracked(ConfirmState::is_shown));
    assert_eq!(ok.load(Ordering::SeqCst), 1);
    assert_eq!(cancel.load(Ordering::SeqCst), 0);
}

#[test]
fn resolve_confirm_without_dialog_is_noop() {
    let confirm = RwSignal::new(ConfirmState::default());
    resolve_confirm(confirm, ConfirmChoice::Cancel);
    assert!(!confirm.with_untracked(ConfirmState::is_shown));
}

#[test]
fn show_confirm_through_signal_rejects_second_dialog() {
    let confirm = RwSignal::new(ConfirmState::default());
    show_confirm(confirm, ConfirmRequest::new("First", "one")).unwrap();
    assert_eq!(
        show_confirm(confirm, ConfirmRequest::new("Second", "two")),
        Err(ConfirmError::AlreadyShown)
    );
    let title = confirm.with_untracked(|s| s.active().map(|r| r.title.clone()));
    assert_eq!(title.as_deref(), Some("First"));
}

#[test]
fn ok_action_can_open_follow_up_dialog() {
    let confirm = RwSignal::new(ConfirmState::default());
    let opened = Arc::new(AtomicUsize::new(0));
    let opened_in_action = Arc::clone(&opened);
    let request = ConfirmRequest::new("Delete", "Delete this blog?").on_ok(move || {
        if show_confirm(confirm, ConfirmRequest::new("Deleted", "Undo?")).is_ok() {
            opened_in_action.fetch_add(1, Ordering::SeqCst);
        }
    });
    show_confirm(confirm, request).unwrap();

    resolve_confirm(confirm, ConfirmChoice::Continue);

    assert_eq!(opened.load(Ordering::SeqCst), 1);
    let title = confirm.with_untracked(|s| s.active().map(|r| r.title.clone()));
    assert_eq!(title.as_deref(), Some("Deleted"));
}

#[test]
fn show_confirm_on_disposed_signal_reports_disposed() {
    let confirm = RwSignal::new(ConfirmState::default());
    confirm.dispose();
    assert_eq!(
        show_confirm(confirm, ConfirmRequest::new("Title", "Text")),
        Err(ConfirmError::Disposed)
    );
}
