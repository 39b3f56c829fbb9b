use bevy::prelude::*;
use bevy::window::WindowResized;

use super::parallax_camera::BackdropCamera;

/// Current dimensions of the rendering surface in logical pixels. Injected
/// state rather than an ambient window query, so pointer normalization and
/// scroll reveal stay testable without a windowing backend.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Aspect ratio, guarding the degenerate zero-height surface.
    pub fn aspect(&self) -> f32 {
        if self.height <= f32::EPSILON {
            1.0
        } else {
            self.width / self.height
        }
    }
}

/// Keep the viewport size and the camera projection aspect in sync with the
/// window, so the rendered image stays undistorted across resizes.
pub fn handle_viewport_resize(
    mut resize_events: EventReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    mut projections: Query<&mut Projection, With<BackdropCamera>>,
) {
    let Some(resized) = resize_events.read().last() else {
        return;
    };

    *viewport = ViewportSize::new(resized.width, resized.height);

    for mut projection in &mut projections {
        if let Projection::Perspective(ref mut perspective) = *projection {
            perspective.aspect_ratio = viewport.aspect();
        }
    }
}
