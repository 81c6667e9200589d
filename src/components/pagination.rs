//! Previous/next pager for paged blog and comment lists.

use leptos::prelude::*;

use crate::net::types::PageInfo;
use crate::util::nav::goto_page;

/// Pager driven by the list response's `page` summary.
///
/// Links reload the current URL with an updated `page` parameter, keeping any
/// other query parameters.
#[component]
pub fn Pagination(#[prop(into)] page: Signal<PageInfo>) -> impl IntoView {
    let previous = move || page.with(PageInfo::previous_index);
    let next = move || page.with(PageInfo::next_index);
    let summary = move || page.with(|p| format!("{} / {}", p.page_index, p.page_count.max(1)));

    view! {
        <ul class="pager">
            <li class="previous" class:disabled=move || previous().is_none()>
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        if let Some(index) = previous() {
                            goto_page(index);
                        }
                    }
                >
                    "← Previous"
                </a>
            </li>
            <li class="pager-summary">{summary}</li>
            <li class="next" class:disabled=move || next().is_none()>
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        if let Some(index) = next() {
                            goto_page(index);
                        }
                    }
                >
                    "Next →"
                </a>
            </li>
        </ul>
    }
}
