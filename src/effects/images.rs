//! Image fade-in. Every image starts transparent and fades to full opacity
//! when its load completes; images that finished loading before we got here
//! are shown immediately so they never stay stuck invisible.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

pub fn fade_in_images(document: &Document) {
    let images = match document.query_selector_all("img") {
        Ok(images) => images,
        Err(_) => return,
    };
    for i in 0..images.length() {
        let image = match images
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
        {
            Some(image) => image,
            None => continue,
        };

        let _ = image.style().set_property("opacity", "0");
        let _ = image.style().set_property(
            "transition",
            "opacity var(--duration-normal) var(--ease-standard)",
        );

        let callback = Closure::<dyn FnMut()>::new({
            let image = image.clone();
            move || {
                let _ = image.style().set_property("opacity", "1");
            }
        });
        let _ = image.add_event_listener_with_callback("load", callback.as_ref().unchecked_ref());
        callback.forget();

        if image.complete() {
            let _ = image.style().set_property("opacity", "1");
        }
    }
}
