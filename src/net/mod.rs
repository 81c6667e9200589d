//! Networking modules for the blog's JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues requests and classifies responses, and `types` defines the
//! error and pagination payloads shared with the UI state.

pub mod api;
pub mod types;
