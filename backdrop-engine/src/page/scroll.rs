use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use constants::page_settings::LINE_SCROLL_PIXELS;

/// Vertical scroll offset of the page, in pixels from the top.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PageScroll {
    pub offset: f32,
}

/// Accumulate wheel input into the page scroll offset, clamped at the top.
pub fn track_page_scroll(
    mut wheel_events: EventReader<MouseWheel>,
    mut scroll: ResMut<PageScroll>,
) {
    for ev in wheel_events.read() {
        let delta = match ev.unit {
            MouseScrollUnit::Line => ev.y * LINE_SCROLL_PIXELS,
            MouseScrollUnit::Pixel => ev.y,
        };
        scroll.offset = (scroll.offset - delta).max(0.0);
    }
}
