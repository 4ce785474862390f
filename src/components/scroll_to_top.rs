//! Floating "back to top" button, shown once the reader has scrolled past the
//! hero area.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::utils::scroll;

const BUTTON_STYLE: &str = "\
    position: fixed; \
    bottom: 30px; \
    right: 30px; \
    width: 50px; \
    height: 50px; \
    border-radius: 50%; \
    background: var(--color-primary); \
    color: var(--color-btn-primary-text); \
    border: none; \
    font-size: 20px; \
    font-weight: bold; \
    cursor: pointer; \
    z-index: 1000; \
    transition: all var(--duration-normal) var(--ease-standard); \
    box-shadow: var(--shadow-lg);";

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let visible = visible.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(y) = win.scroll_y() {
                                    visible.set(scroll::scroll_top_visible(y));
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    // Initial call
                    if let Ok(y) = window.scroll_y() {
                        visible.set(scroll::scroll_top_visible(y));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let state = if *visible {
        "opacity: 1; visibility: visible; transform: translateY(0);"
    } else {
        "opacity: 0; visibility: hidden; transform: translateY(10px);"
    };

    html! {
        <button
            class="scroll-to-top"
            aria-label="Scroll to top"
            style={format!("{BUTTON_STYLE} {state}")}
            {onclick}
        >
            {"↑"}
        </button>
    }
}
