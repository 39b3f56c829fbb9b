use bevy::prelude::*;

use constants::page_settings::{CARD_HOVER_SCALE, CARD_TILT_DEGREES};

use super::classes::ElementRect;
use super::scroll::PageScroll;
use crate::engine::camera::parallax_camera::PointerState;

/// Marker for cards with the 3D tilt hover effect.
#[derive(Component)]
pub struct TiltCard;

/// Tilt angles in degrees for a pointer at `local` within a card of `size`:
/// the X rotation follows the vertical offset (inverted), the Y rotation
/// the horizontal one.
pub fn tilt_angles(local: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        (local.y / size.y - 0.5) * -CARD_TILT_DEGREES,
        (local.x / size.x - 0.5) * CARD_TILT_DEGREES,
    )
}

/// Tilt hovered cards toward the pointer; reset cards the pointer has left.
pub fn card_tilt_system(
    pointer: Res<PointerState>,
    scroll: Res<PageScroll>,
    mut cards: Query<(&ElementRect, &mut Transform), With<TiltCard>>,
) {
    // Card rects are document space; the pointer sample is viewport space.
    let pointer_doc = pointer.pixel + Vec2::new(0.0, scroll.offset);

    for (rect, mut transform) in &mut cards {
        if rect.0.contains(pointer_doc) {
            let angles = tilt_angles(pointer_doc - rect.0.min, rect.0.size());
            transform.rotation = Quat::from_euler(
                EulerRot::XYZ,
                angles.x.to_radians(),
                angles.y.to_radians(),
                0.0,
            );
            transform.scale = Vec3::splat(CARD_HOVER_SCALE);
        } else {
            transform.rotation = Quat::IDENTITY;
            transform.scale = Vec3::ONE;
        }
    }
}
