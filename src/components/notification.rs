//! Transient banner notifications, pinned to the top-right corner.
//!
//! The page shows at most one banner at a time: the element currently on
//! screen is held in a single slot, and `notify` evicts the occupant before
//! inserting the new banner. Dismissal is raced between a 5s auto-dismiss
//! timer and the banner's close button; whichever fires second finds the
//! element already detached and does nothing.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node};

use crate::config;

/// Visual register of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// Modifier suffix for the banner's CSS class.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Style variable for the banner's left-border accent.
    pub fn accent_color(self) -> &'static str {
        match self {
            Severity::Info => "var(--color-primary)",
            Severity::Success => "var(--color-success)",
            Severity::Error => "var(--color-error)",
        }
    }
}

thread_local! {
    // The banner currently on screen, if any.
    static CURRENT: RefCell<Option<HtmlElement>> = RefCell::new(None);
}

const BANNER_STYLE: &str = "\
    position: fixed; \
    top: 100px; \
    right: 20px; \
    background: var(--color-surface); \
    border: 1px solid var(--color-border); \
    border-radius: var(--radius-base); \
    padding: var(--space-16); \
    box-shadow: var(--shadow-lg); \
    z-index: 1001; \
    max-width: 400px; \
    transition: all var(--duration-normal) var(--ease-standard); \
    transform: translateX(100%); \
    display: flex; \
    align-items: center;";

const CLOSE_STYLE: &str =
    "background: none; border: none; font-size: 20px; cursor: pointer; margin-left: 10px;";

/// Shows `message` as a dismissible banner, replacing any banner already on
/// screen. Reachable from every behavior on the page; the contact form is the
/// main caller.
pub fn notify(message: &str, severity: Severity) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };
    let body = match document.body() {
        Some(b) => b,
        None => return,
    };

    // Evict whatever occupies the slot before inserting the new banner.
    CURRENT.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            old.remove();
        }
    });

    let banner: HtmlElement = match document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into().ok())
    {
        Some(el) => el,
        None => return,
    };
    banner.set_class_name(&format!(
        "notification notification--{}",
        severity.class_suffix()
    ));
    banner.set_inner_html(
        "<div class=\"notification__content\">\
            <span class=\"notification__message\"></span>\
            <button class=\"notification__close\">&times;</button>\
        </div>",
    );
    // textContent, not innerHTML: the message may quote user input.
    if let Ok(Some(text)) = banner.query_selector(".notification__message") {
        text.set_text_content(Some(message));
    }

    banner.style().set_css_text(BANNER_STYLE);
    let _ = banner
        .style()
        .set_property("border-left", &format!("4px solid {}", severity.accent_color()));

    if body.append_child(&banner).is_err() {
        return;
    }
    CURRENT.with(|slot| *slot.borrow_mut() = Some(banner.clone()));

    // Applied a beat after insertion so the slide-in transition runs.
    Timeout::new(config::NOTIFICATION_ENTER_DELAY_MS, {
        let banner = banner.clone();
        move || {
            let _ = banner.style().set_property("transform", "translateX(0)");
        }
    })
    .forget();

    if let Ok(Some(close)) = banner.query_selector(".notification__close") {
        if let Ok(close) = close.dyn_into::<HtmlElement>() {
            close.style().set_css_text(CLOSE_STYLE);
            let callback = Closure::<dyn FnMut()>::new({
                let banner = banner.clone();
                move || dismiss(banner.clone())
            });
            let _ = close
                .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
            // The listener lives as long as the banner; one leaked closure per
            // banner is the cost of imperative construction.
            callback.forget();
        }
    }

    Timeout::new(config::NOTIFICATION_DISMISS_MS, move || dismiss(banner)).forget();
}

/// Slides the banner out and detaches it. A banner that already lost the
/// dismissal race is left alone.
fn dismiss(banner: HtmlElement) {
    if banner.parent_node().is_none() {
        return;
    }
    let _ = banner.style().set_property("transform", "translateX(100%)");
    Timeout::new(config::NOTIFICATION_SLIDE_MS, move || {
        banner.remove();
        CURRENT.with(|slot| {
            let mut current = slot.borrow_mut();
            let holds_banner = current
                .as_ref()
                .is_some_and(|c| {
                    let node: &Node = banner.as_ref();
                    c.is_same_node(Some(node))
                });
            if holds_banner {
                *current = None;
            }
        });
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_severity_has_its_own_accent() {
        assert_eq!(Severity::Info.accent_color(), "var(--color-primary)");
        assert_eq!(Severity::Success.accent_color(), "var(--color-success)");
        assert_eq!(Severity::Error.accent_color(), "var(--color-error)");
    }

    #[test]
    fn class_suffix_matches_stylesheet_modifiers() {
        assert_eq!(Severity::Info.class_suffix(), "info");
        assert_eq!(Severity::Success.class_suffix(), "success");
        assert_eq!(Severity::Error.class_suffix(), "error");
    }
}
