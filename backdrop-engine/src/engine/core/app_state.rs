use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::camera::viewport::ViewportSize;

/// Lifecycle of the backdrop: config resolution, steady-state animation and
/// an explicit stopped state so embedders can tear the loop down.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum BackdropState {
    #[default]
    Loading,
    Running,
    Stopped,
}

/// Cancellation handle for the animation loop. Any system, or the host
/// embedding the backdrop, sends this to halt all per-frame work.
#[derive(Event, Default)]
pub struct StopBackdrop;

/// Bail out when no rendering surface exists, mirroring the page script
/// aborting when its canvas is missing. With a surface present, record its
/// initial dimensions.
pub fn detect_surface(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
    mut next_state: ResMut<NextState<BackdropState>>,
) {
    match windows.single() {
        Ok(window) => {
            *viewport = ViewportSize::new(window.width(), window.height());
        }
        Err(_) => {
            warn!("Backdrop surface not found, backdrop disabled");
            next_state.set(BackdropState::Stopped);
        }
    }
}

/// Transition to `Stopped` when a stop request arrives.
pub fn handle_stop_events(
    mut stop_events: EventReader<StopBackdrop>,
    mut next_state: ResMut<NextState<BackdropState>>,
) {
    if stop_events.read().next().is_some() {
        info!("→ Backdrop stopped");
        next_state.set(BackdropState::Stopped);
    }
}
