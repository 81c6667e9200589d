//! Page and category navigation.
//!
//! URL rewriting is pure and tested; `goto_page`/`go_category` assign the
//! result to `window.location` and are no-ops outside the browser.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

static PAGE_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"page=[0-9]+&?").expect("page pattern compiles"));

/// Compute the search string that selects page `index`.
///
/// Every `page=<digits>` occurrence (with one trailing `&`) is removed before
/// the new parameter is appended. Returns `None` for index 0.
pub fn page_search(search: &str, index: u32) -> Option<String> {
    if index == 0 {
        return None;
    }
    let stripped = PAGE_PARAM_RE.replace_all(search, "");
    if stripped.is_empty() || stripped == "?" {
        Some(format!("?page={index}"))
    } else {
        Some(format!("{stripped}&page={index}"))
    }
}

fn is_uri_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-_.!~*'();/?:@&=+$,#".contains(&b)
}

/// Percent-encode everything `encodeURI` would: UTF-8 bytes outside the
/// unreserved and reserved URI sets.
pub fn encode_uri(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        if is_uri_safe(b) {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}

/// Path for a category listing.
///
/// The segment is encoded twice, matching the category links the server renders.
pub fn category_path(category: &str) -> String {
    encode_uri(&encode_uri(&format!("/category/{category}")))
}

#[cfg(feature = "hydrate")]
fn assign_location(target: &str) {
    let Some(window) = web_sys::window() else {
        leptos::logging::warn!("navigation to {target} skipped: no window");
        return;
    };
    if let Err(e) = window.location().assign(target) {
        leptos::logging::warn!("navigation to {target} failed: {e:?}");
    }
}

/// Reload the current page with `page=<index>` in its query string.
pub fn goto_page(index: u32) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let search = window.location().search().unwrap_or_default();
        if let Some(next) = page_search(&search, index) {
            assign_location(&next);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = index;
    }
}

/// Navigate to the listing for `category`.
pub fn go_category(category: &str) {
    #[cfg(feature = "hydrate")]
    {
        assign_location(&category_path(category));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = category;
    }
}
