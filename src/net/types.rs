//! JSON API payload types shared by the request helpers and the UI state.
//!
//! DESIGN
//! ======
//! The blog API reports failures inside an ordinary JSON body
//! (`{"error": ..., "data": ..., "message": ...}`). `ErrorValue` keeps the raw
//! JSON so any shape the server or a caller produces can still be displayed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JavaScript-style truthiness for a JSON value.
///
/// `null`, `false`, `0`, and `""` are falsy; arrays and objects are always truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns `true` when a response body carries a truthy `error` field.
pub fn is_error_body(body: &Value) -> bool {
    body.get("error").map_or(false, is_truthy)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// An error reported to the user: a structured `{error, message, data}` body
/// or any raw JSON scalar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorValue(pub Value);

impl ErrorValue {
    /// Synthetic error for a failed HTTP exchange.
    pub fn transport(status: u16) -> Self {
        Self(serde_json::json!({
            "error": format!("HTTP {status}"),
            "message": format!("Network error (HTTP {status})"),
        }))
    }

    /// Error carrying only a message, for client-side validation failures.
    pub fn message(message: impl Into<String>) -> Self {
        Self(serde_json::json!({ "message": message.into() }))
    }

    /// Machine-readable error code such as `value:invalid`, when present.
    pub fn error_code(&self) -> Option<String> {
        self.0.get("error").filter(|v| is_truthy(v)).map(scalar_text)
    }

    /// Offending field or resource named by the server, when present.
    pub fn data(&self) -> Option<&Value> {
        self.0.get("data").filter(|v| is_truthy(v))
    }

    pub fn is_truthy(&self) -> bool {
        is_truthy(&self.0)
    }

    /// Text for the error banner: `message`, then `error`, then the value itself.
    pub fn display_text(&self) -> String {
        ["message", "error"]
            .iter()
            .filter_map(|key| self.0.get(*key))
            .find(|v| is_truthy(v))
            .map_or_else(|| scalar_text(&self.0), scalar_text)
    }
}

impl From<Value> for ErrorValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&str> for ErrorValue {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_owned()))
    }
}

/// Pagination summary attached to list responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page_index: u32,
    pub page_count: u32,
    pub item_count: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page_index: 1,
            page_count: 0,
            item_count: 0,
            has_next: false,
            has_previous: false,
        }
    }
}

impl PageInfo {
    /// Page number reached by the "previous" control, if any.
    pub fn previous_index(&self) -> Option<u32> {
        (self.has_previous && self.page_index > 1).then(|| self.page_index - 1)
    }

    /// Page number reached by the "next" control, if any.
    pub fn next_index(&self) -> Option<u32> {
        self.has_next.then(|| self.page_index + 1)
    }
}
