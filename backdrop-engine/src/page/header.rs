use bevy::prelude::*;

use constants::page_settings::{
    CLASS_HEADER_COMPACT, CLASS_HEADER_EXPANDED, HEADER_SCROLL_THRESHOLD,
};

use super::classes::StyleClasses;
use super::scroll::PageScroll;

/// Marker for the page header element.
#[derive(Component)]
pub struct Header;

/// True when the scroll offset calls for the compact header padding.
pub fn header_is_compact(offset: f32) -> bool {
    offset > HEADER_SCROLL_THRESHOLD
}

/// Swap the header padding classes as the page scrolls past the threshold.
pub fn header_scroll_system(
    scroll: Res<PageScroll>,
    mut headers: Query<&mut StyleClasses, With<Header>>,
) {
    for mut classes in &mut headers {
        if header_is_compact(scroll.offset) {
            classes.add(CLASS_HEADER_COMPACT);
            classes.remove(CLASS_HEADER_EXPANDED);
        } else {
            classes.add(CLASS_HEADER_EXPANDED);
            classes.remove(CLASS_HEADER_COMPACT);
        }
    }
}
