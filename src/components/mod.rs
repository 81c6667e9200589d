//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the blog's form chrome, dialogs, and list controls while
//! reading/writing the signals installed by `state::provide_ui_context`.

pub mod confirm_dialog;
pub mod error_banner;
pub mod pagination;
pub mod submit_button;
pub mod timestamp;
