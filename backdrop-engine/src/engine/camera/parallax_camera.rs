use bevy::prelude::*;
use bevy::window::CursorMoved;

use constants::backdrop_settings::{
    CAMERA_DEPTH, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, POINTER_TARGET_SCALE,
};

use super::viewport::ViewportSize;
use crate::engine::core::config::BackdropConfig;

/// Marker for the backdrop camera entity.
#[derive(Component)]
pub struct BackdropCamera;

/// Last observed pointer sample, raw pixels plus normalized device
/// coordinates. Last write wins; consumed lazily by the next frame update.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub pixel: Vec2,
    pub ndc: Vec2,
}

/// Map a pixel-space pointer position to [-1, 1] device coordinates, the
/// vertical axis flipped to the scene's upward-positive convention.
pub fn normalize_pointer(pixel: Vec2, viewport: ViewportSize) -> Vec2 {
    Vec2::new(
        (pixel.x / viewport.width) * 2.0 - 1.0,
        -(pixel.y / viewport.height) * 2.0 + 1.0,
    )
}

/// One exponential-smoothing step: advance by `factor` of the remaining
/// distance toward `target`. With factor < 1 this converges geometrically
/// and never overshoots.
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Spawn the backdrop camera at its rest depth, aimed at the origin.
pub fn spawn_backdrop_camera(mut commands: Commands, viewport: Res<ViewportSize>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            aspect_ratio: viewport.aspect(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_DEPTH).looking_at(Vec3::ZERO, Vec3::Y),
        BackdropCamera,
    ));
}

/// Record the latest pointer sample in normalized device coordinates.
pub fn track_pointer(
    mut cursor_moved: EventReader<CursorMoved>,
    viewport: Res<ViewportSize>,
    mut pointer: ResMut<PointerState>,
) {
    for cursor in cursor_moved.read() {
        pointer.pixel = cursor.position;
        pointer.ndc = normalize_pointer(cursor.position, *viewport);
    }
}

/// Ease the camera toward the pointer-derived target by the configured
/// fraction of the remaining distance, exactly once per frame, then re-aim
/// it at the origin. Depth is left untouched.
pub fn parallax_camera(
    pointer: Res<PointerState>,
    config: Res<BackdropConfig>,
    mut cameras: Query<&mut Transform, With<BackdropCamera>>,
) {
    if let Ok(mut transform) = cameras.single_mut() {
        let target = pointer.ndc * POINTER_TARGET_SCALE;
        transform.translation.x = approach(transform.translation.x, target.x, config.smoothing);
        transform.translation.y = approach(transform.translation.y, target.y, config.smoothing);
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}
