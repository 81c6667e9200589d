//! Inline rendering of a Unix timestamp in the reader's local time.
//!
//! The server cannot know the reader's timezone, so server-rendered and
//! pre-hydration output is UTC. The browser swaps in local time once the
//! component has hydrated.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use chrono::Utc;
use leptos::prelude::*;

use crate::config::UiConfig;
use crate::util::datetime::{to_date_time, to_iso_string};

/// Text rendered before hydration; independent of the host's timezone.
fn initial_text(secs: f64, format: &str) -> String {
    to_date_time(secs, Some(format), &Utc).unwrap_or_default()
}

/// `<time>` element formatted with `format`, or the configured date format.
#[component]
pub fn Timestamp(secs: f64, #[prop(optional, into)] format: Option<String>) -> impl IntoView {
    let format = format.unwrap_or_else(|| use_context::<UiConfig>().unwrap_or_default().date_format);
    let datetime = to_iso_string(secs).unwrap_or_default();
    let text = RwSignal::new(initial_text(secs, &format));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Ok(local) = crate::util::datetime::to_local_date_time(secs, Some(&format)) {
            text.set(local);
        }
    });

    view! { <time class="timestamp" datetime=datetime>{move || text.get()}</time> }
}
