//! Utility helpers shared across the blog UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting and validation live here alongside the browser navigation
//! wrappers, so page handlers and components share one implementation.

pub mod datetime;
pub mod email;
pub mod nav;
