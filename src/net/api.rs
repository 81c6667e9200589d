//! JSON API helpers for the blog's `/api/*` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): requests resolve to `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every request resolves to `Result<Value, ApiError>`. A failed HTTP exchange
//! and an application error reported inside a 200 body are both errors; the
//! caller tells them apart by variant instead of by callback arity.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{ErrorValue, is_error_body};
use crate::config::UiConfig;

/// Outcome of one API call.
pub type ApiResult = Result<Value, ApiError>;

/// Failure of an API call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx status, network failure (status 0), or an unparseable body.
    #[error("Network error (HTTP {status})")]
    Transport { status: u16 },
    /// The server answered with a body carrying a truthy `error` field.
    #[error("{}", .0.display_text())]
    Api(ErrorValue),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Error value suitable for `FormState::show_error`.
    pub fn error_value(&self) -> ErrorValue {
        match self {
            Self::Transport { status } => ErrorValue::transport(*status),
            Self::Api(value) => value.clone(),
            Self::Unavailable => ErrorValue::message(self.to_string()),
        }
    }

    /// HTTP status of a transport failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status } => Some(*status),
            _ => None,
        }
    }
}

/// HTTP verbs used by the blog API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Turn a finished exchange into an `ApiResult`.
///
/// `body` is `None` when the response could not be parsed as JSON. That is a
/// transport failure with the received status, except for 204 and 304, which
/// carry no body and succeed with `Value::Null`.
pub fn classify_response(status: u16, body: Option<Value>) -> ApiResult {
    let success = (200..300).contains(&status) || status == 304;
    match body {
        Some(body) if success => {
            if is_error_body(&body) {
                Err(ApiError::Api(ErrorValue(body)))
            } else {
                Ok(body)
            }
        }
        None if status == 204 || status == 304 => Ok(Value::Null),
        _ => Err(ApiError::Transport { status }),
    }
}

fn form_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn push_pair(out: &mut Vec<String>, key: &str, value: &str) {
    let pair = format!("{}={}", urlencoding::encode(key), urlencoding::encode(value));
    out.push(pair.replace("%20", "+"));
}

fn build_params(prefix: &str, value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if prefix.ends_with("[]") {
                    push_pair(out, prefix, &form_value(item));
                } else if item.is_object() || item.is_array() {
                    build_params(&format!("{prefix}[{i}]"), item, out);
                } else {
                    build_params(&format!("{prefix}[]"), item, out);
                }
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                build_params(&format!("{prefix}[{key}]"), item, out);
            }
        }
        other => push_pair(out, prefix, &form_value(other)),
    }
}

/// Form-encode the members of a JSON object with bracketed keys.
///
/// Scalar arrays become repeated `key[]` pairs, nested objects `key[sub]`, and
/// containers inside arrays `key[i][sub]`. Non-object input encodes to an
/// empty string.
pub fn encode_form(data: &Value) -> String {
    let Some(map) = data.as_object() else {
        return String::new();
    };
    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        build_params(key, value, &mut pairs);
    }
    pairs.join("&")
}

/// Append an encoded query to a URL that may already carry one.
pub fn with_query(url: &str, query: &str) -> String {
    if query.is_empty() {
        url.to_owned()
    } else if url.contains('?') {
        format!("{url}&{query}")
    } else {
        format!("{url}?{query}")
    }
}

/// Thin JSON API client bound to an optional base URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    /// Absolute URLs pass through; everything else is prefixed with the base.
    pub fn resolve(&self, url: &str) -> String {
        if self.base.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
            return url.to_owned();
        }
        format!("{}/{}", self.base.trim_end_matches('/'), url.trim_start_matches('/'))
    }

    /// Issue one request and classify the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` for HTTP/network/parse failures and
    /// `ApiError::Api` when the body reports an error.
    pub async fn request(&self, method: Method, url: &str, data: Option<&Value>) -> ApiResult {
        let empty = Value::Object(serde_json::Map::new());
        let form = encode_form(data.unwrap_or(&empty));
        let url = self.resolve(url);
        let result = send(method, &url, form).await;
        match &result {
            Err(ApiError::Transport { status }) => {
                leptos::logging::warn!("{} {url} failed: HTTP {status}", method.as_str());
            }
            Err(ApiError::Api(value)) => {
                leptos::logging::log!("{} {url} returned error: {}", method.as_str(), value.display_text());
            }
            _ => {}
        }
        result
    }

    /// `GET` with `data` appended as a query string (default `{}`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get(&self, url: &str, data: Option<&Value>) -> ApiResult {
        self.request(Method::Get, url, data).await
    }

    /// `POST` with `data` as a form-encoded body (default `{}`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post(&self, url: &str, data: Option<&Value>) -> ApiResult {
        self.request(Method::Post, url, data).await
    }
}

async fn send(method: Method, url: &str, form: String) -> ApiResult {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let sent = match method {
            Method::Get => {
                Request::get(&with_query(url, &form))
                    .header("Accept", "application/json")
                    .send()
                    .await
            }
            Method::Post => {
                let request = Request::post(url)
                    .header("Accept", "application/json")
                    .header("Content-Type", "application/x-www-form-urlencoded; charset=UTF-8")
                    .body(form)
                    .map_err(|_| ApiError::Transport { status: 0 })?;
                request.send().await
            }
        };
        let resp = sent.map_err(|_| ApiError::Transport { status: 0 })?;
        let status = resp.status();
        let body = resp.json::<Value>().await.ok();
        classify_response(status, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, form);
        Err(ApiError::Unavailable)
    }
}

/// `GET` through a client with no base URL.
///
/// # Errors
///
/// See [`ApiClient::request`].
pub async fn get_api(url: &str, data: Option<&Value>) -> ApiResult {
    ApiClient::default().get(url, data).await
}

/// `POST` through a client with no base URL.
///
/// # Errors
///
/// See [`ApiClient::request`].
pub async fn post_api(url: &str, data: Option<&Value>) -> ApiResult {
    ApiClient::default().post(url, data).await
}
