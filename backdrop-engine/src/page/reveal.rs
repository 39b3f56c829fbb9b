use bevy::prelude::*;

use constants::page_settings::{
    CLASS_ANIMATE_ON_SCROLL, CLASS_IS_VISIBLE, REVEAL_VISIBILITY_THRESHOLD,
};

use super::classes::{ElementRect, StyleClasses};
use super::scroll::PageScroll;
use crate::engine::camera::viewport::ViewportSize;

/// Fraction of `rect` (document space) visible in a viewport of `height`
/// pixels scrolled down to `offset`.
pub fn visible_fraction(rect: Rect, offset: f32, height: f32) -> f32 {
    if rect.height() <= f32::EPSILON {
        return 0.0;
    }
    let view_top = offset;
    let view_bottom = offset + height;
    let visible = (rect.max.y.min(view_bottom) - rect.min.y.max(view_top)).max(0.0);
    visible / rect.height()
}

/// Reveal scroll-animated elements once a tenth of them is visible. The
/// class is only ever added, so elements stay revealed after leaving and
/// re-entering the viewport.
pub fn reveal_on_scroll(
    scroll: Res<PageScroll>,
    viewport: Res<ViewportSize>,
    mut elements: Query<(&ElementRect, &mut StyleClasses)>,
) {
    for (rect, mut classes) in &mut elements {
        if !classes.contains(CLASS_ANIMATE_ON_SCROLL) {
            continue;
        }
        if visible_fraction(rect.0, scroll.offset, viewport.height) >= REVEAL_VISIBILITY_THRESHOLD
        {
            classes.add(CLASS_IS_VISIBLE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_visible_element_has_fraction_one() {
        let rect = Rect::new(0.0, 100.0, 300.0, 300.0);
        assert_eq!(visible_fraction(rect, 0.0, 800.0), 1.0);
    }

    #[test]
    fn element_below_the_fold_is_invisible() {
        let rect = Rect::new(0.0, 1200.0, 300.0, 1400.0);
        assert_eq!(visible_fraction(rect, 0.0, 800.0), 0.0);
    }

    #[test]
    fn partial_overlap_reports_the_visible_share() {
        // 200px tall element, bottom 20px inside an 800px viewport.
        let rect = Rect::new(0.0, 980.0, 300.0, 1180.0);
        let fraction = visible_fraction(rect, 400.0, 800.0);
        assert!((fraction - 0.1).abs() < 1e-6);
    }

    #[test]
    fn zero_height_element_is_never_visible() {
        let rect = Rect::new(0.0, 100.0, 300.0, 100.0);
        assert_eq!(visible_fraction(rect, 0.0, 800.0), 0.0);
    }
}
