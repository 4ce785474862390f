//! Page-wide constants. Everything here is fixed at build time; the page has
//! no runtime configuration surface.

/// Recipient of the contact form's mailto link.
pub const CONTACT_EMAIL: &str = "ansoni.work10@gmail.com";

/// Used when the fixed header cannot be measured.
pub const HEADER_FALLBACK_HEIGHT: i32 = 80;

/// Extra clearance between the header's bottom edge and a scrolled-to section.
pub const SCROLL_ANCHOR_PADDING: i32 = 20;

/// Scroll depth past which the header switches to its opaque presentation.
pub const HEADER_OPAQUE_THRESHOLD: f64 = 100.0;

/// Scroll depth past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

/// Lookahead added to the scroll position when deciding which section the
/// reader is "in", so a section highlights shortly before it reaches the top.
pub const ACTIVE_SECTION_BIAS: f64 = 200.0;

/// How long a notification stays up before dismissing itself.
pub const NOTIFICATION_DISMISS_MS: u32 = 5_000;

/// Delay before the slide-in transform is applied, so the transition runs.
pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 100;

/// Duration of the slide-out transition before the banner is detached.
pub const NOTIFICATION_SLIDE_MS: u32 = 300;

/// Pause after page load before the tagline starts typing.
pub const TYPEWRITER_START_DELAY_MS: u32 = 1_000;

/// Per-character reveal interval for the tagline.
pub const TYPEWRITER_CHAR_DELAY_MS: u32 = 30;
