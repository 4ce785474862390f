//! DOM side of the scroll behaviors: measuring section ranges and issuing
//! smooth scrolls. The decisions themselves live in `utils::scroll`.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;
use crate::utils::scroll::{self, SectionSpan};

/// Snapshot of every `section[id]`'s vertical range, in document order.
pub fn section_spans(document: &Document) -> Vec<SectionSpan> {
    let mut spans = Vec::new();
    if let Ok(nodes) = document.query_selector_all("section[id]") {
        for i in 0..nodes.length() {
            if let Some(section) = nodes
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                spans.push(SectionSpan {
                    id: section.id(),
                    top: section.offset_top() as f64,
                    height: section.offset_height() as f64,
                });
            }
        }
    }
    spans
}

/// Smoothly scrolls so `section_id` sits just below the fixed header. Missing
/// section means no scroll; missing header falls back to a nominal height.
pub fn scroll_to_section(section_id: &str) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };
    let target = match document
        .get_element_by_id(section_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        Some(t) => t,
        None => return,
    };
    let header_height = document
        .get_element_by_id("header")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|header| header.offset_height())
        .unwrap_or(config::HEADER_FALLBACK_HEIGHT);

    let options = ScrollToOptions::new();
    options.set_top(scroll::anchor_offset(target.offset_top(), header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
