/// Scroll offset in pixels past which the header swaps to compact padding.
pub const HEADER_SCROLL_THRESHOLD: f32 = 50.0;

/// Pixels of page scroll per wheel line step.
pub const LINE_SCROLL_PIXELS: f32 = 40.0;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_VISIBILITY_THRESHOLD: f32 = 0.1;

/// Maximum tilt in degrees across a hovered card.
pub const CARD_TILT_DEGREES: f32 = 15.0;

/// Scale applied to a hovered card.
pub const CARD_HOVER_SCALE: f32 = 1.03;

/// Class names mirrored from the page stylesheet.
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_HEADER_EXPANDED: &str = "py-4";
pub const CLASS_HEADER_COMPACT: &str = "py-2";
pub const CLASS_NAV_LINK: &str = "nav-link";
pub const CLASS_ACTIVE_LINK: &str = "active-link";
pub const CLASS_ANIMATE_ON_SCROLL: &str = "animate-on-scroll";
pub const CLASS_IS_VISIBLE: &str = "is-visible";
pub const CLASS_CARD_TILT: &str = "card-3d-hover";

/// Page basename assumed when the location path is empty.
pub const DEFAULT_PAGE: &str = "index.html";
