//! Scroll-position decisions, kept free of DOM types so they can be tested
//! without a browser. The thin wiring that reads `window.scroll_y()` and
//! applies classes lives in the page component and `effects::scroll`.

use crate::config;

/// Vertical range occupied by one page section, captured at scroll time.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Whether the fixed header should use its opaque surface presentation.
pub fn header_is_opaque(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_OPAQUE_THRESHOLD
}

/// Inline style for the fixed header in either presentation.
pub fn header_style(opaque: bool) -> &'static str {
    if opaque {
        "background: var(--color-surface); box-shadow: var(--shadow-sm); backdrop-filter: blur(10px);"
    } else {
        "background: rgba(252, 252, 249, 0.95); box-shadow: none; backdrop-filter: blur(10px);"
    }
}

/// Whether the scroll-to-top button should be shown.
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_TOP_THRESHOLD
}

/// Scroll offset that places `section_top` just below the fixed header,
/// clamped so we never ask for a negative position.
pub fn anchor_offset(section_top: i32, header_height: i32) -> f64 {
    (section_top - header_height - config::SCROLL_ANCHOR_PADDING).max(0) as f64
}

/// Id of the section the reader is currently "in": the one whose vertical
/// range contains the biased scroll position. `None` when no section matches,
/// in which case no nav link is highlighted.
pub fn active_section(spans: &[SectionSpan], scroll_y: f64) -> Option<&str> {
    let pos = scroll_y + config::ACTIVE_SECTION_BIAS;
    spans
        .iter()
        .find(|s| pos >= s.top && pos < s.top + s.height)
        .map(|s| s.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: &str, top: f64, height: f64) -> SectionSpan {
        SectionSpan {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn header_opaque_only_past_threshold() {
        assert!(!header_is_opaque(0.0));
        assert!(!header_is_opaque(100.0));
        assert!(header_is_opaque(100.1));
        assert!(header_is_opaque(2_000.0));
    }

    #[test]
    fn header_styles_differ_by_presentation() {
        assert!(header_style(true).contains("var(--color-surface)"));
        assert!(header_style(false).contains("rgba(252, 252, 249, 0.95)"));
    }

    #[test]
    fn scroll_top_button_only_past_threshold() {
        assert!(!scroll_top_visible(500.0));
        assert!(scroll_top_visible(500.5));
    }

    #[test]
    fn anchor_offset_leaves_header_clearance() {
        assert_eq!(anchor_offset(500, 80), 400.0);
    }

    #[test]
    fn anchor_offset_clamps_to_zero() {
        assert_eq!(anchor_offset(50, 80), 0.0);
        assert_eq!(anchor_offset(0, 80), 0.0);
    }

    #[test]
    fn active_section_uses_biased_position() {
        let spans = [span("home", 0.0, 300.0), span("about", 300.0, 500.0)];
        // 250 + 200 bias = 450, inside the second section's range.
        assert_eq!(active_section(&spans, 250.0), Some("about"));
    }

    #[test]
    fn active_section_none_outside_all_ranges() {
        let spans = [span("home", 600.0, 300.0)];
        assert_eq!(active_section(&spans, 0.0), None);
        // Past the last section's end.
        assert_eq!(active_section(&spans, 800.0), None);
    }

    #[test]
    fn active_section_range_is_half_open() {
        let spans = [span("a", 0.0, 300.0), span("b", 300.0, 300.0)];
        assert_eq!(active_section(&spans, 100.0), Some("b"));
        assert_eq!(active_section(&spans, 99.9), Some("a"));
    }
}
