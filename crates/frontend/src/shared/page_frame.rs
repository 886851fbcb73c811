//! PageFrame — standard root wrapper for every page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"a001_order--dashboard"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants
//!
//! Usage:
//! ```ignore
//! view! {
//!     <PageFrame page_id="a001_order--dashboard" category=PAGE_CAT_DASHBOARD>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// CSS class for the page root of a given category
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    }
}

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("PageFrame: page id '{}' does not follow entity--category", page_id);
    }

    view! {
        <div
            id=page_id
            class=page_class(category)
            data-page-category=category
        >
            {children()}
        </div>
    }
}
