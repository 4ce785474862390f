//! Viewport-intersection triggers. Two independent observers: one fades in
//! individual content blocks, one marks whole sections as loaded. Both add a
//! class on first intersection and never remove it; re-adding on a later
//! intersection is idempotent, so neither bothers to unobserve.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Content blocks that fade in as they enter the viewport.
const ANIMATED_SELECTOR: &str = ".education__item, .experience__item, .project__card, \
     .skill__category, .achievement__item, .publication__item";

fn class_adding_observer(
    class: &'static str,
    options: &IntersectionObserverInit,
) -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>::new(
        move |entries: Vec<IntersectionObserverEntry>, _: IntersectionObserver| {
            for entry in entries {
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(class);
                }
            }
        },
    );
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options).ok();
    // Referenced by the browser for the observer's lifetime.
    callback.forget();
    observer
}

fn observe_all(document: &Document, selector: &str, observer: &IntersectionObserver) -> Vec<Element> {
    let mut observed = Vec::new();
    if let Ok(nodes) = document.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(element) = nodes
                .item(i)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                observer.observe(&element);
                observed.push(element);
            }
        }
    }
    observed
}

/// Fade-in trigger: once a content block is 10% visible (with the viewport's
/// bottom edge pulled up 50px), it gains `visible`. Blocks are seeded with
/// `fade-in` so the stylesheet can transition between the two.
pub fn observe_fade_ins(document: &Document) -> Option<IntersectionObserver> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer = class_adding_observer("visible", &options)?;
    for element in observe_all(document, ANIMATED_SELECTOR, &observer) {
        let _ = element.class_list().add_1("fade-in");
    }
    Some(observer)
}

/// Lazy-render trigger: whole sections gain `section-loaded` at 10%
/// visibility.
pub fn observe_sections(document: &Document) -> Option<IntersectionObserver> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));

    let observer = class_adding_observer("section-loaded", &options)?;
    observe_all(document, "section", &observer);
    Some(observer)
}
