//! Page-level UI settings.
//!
//! The server may embed a JSON object in
//! `<script type="application/json" id="ui-config">`; missing keys fall back to
//! the defaults below. Requires a browser environment to read the element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::util::datetime::DEFAULT_FORMAT;

/// Element id holding the embedded JSON config.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Prefix for relative API URLs; empty means same origin.
    pub api_base: String,
    /// Pattern used when a timestamp is rendered without an explicit format.
    pub date_format: String,
    pub confirm_ok_label: String,
    pub confirm_cancel_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            date_format: DEFAULT_FORMAT.to_owned(),
            confirm_ok_label: "Continue".to_owned(),
            confirm_cancel_label: "Cancel".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse an embedded config object.
    ///
    /// # Errors
    ///
    /// Returns the serde error when `raw` is not a JSON object of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the embedded config from the current document, falling back to
    /// defaults when the element is absent or malformed.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw.as_deref().map(Self::from_json) {
                Some(Ok(config)) => config,
                Some(Err(e)) => {
                    leptos::logging::warn!("invalid #{CONFIG_ELEMENT_ID}: {e}");
                    Self::default()
                }
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
