//! Headless tests for the particle backdrop: camera parallax, viewport
//! resizing, surface detection and loop cancellation.

use std::thread::sleep;
use std::time::Duration;

use backdrop_engine::engine::backdrop::point_cloud::{PointCloud, animate_point_cloud};
use backdrop_engine::engine::camera::parallax_camera::{
    BackdropCamera, PointerState, parallax_camera, track_pointer,
};
use backdrop_engine::engine::camera::viewport::{ViewportSize, handle_viewport_resize};
use backdrop_engine::engine::core::app_state::{
    BackdropState, StopBackdrop, detect_surface, handle_stop_events,
};
use backdrop_engine::engine::core::config::BackdropConfig;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::window::{CursorMoved, PrimaryWindow, WindowResized};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<BackdropState>();
    app.add_event::<StopBackdrop>();
    app.add_event::<CursorMoved>();
    app.add_event::<WindowResized>();
    app.init_resource::<PointerState>();
    app.init_resource::<ViewportSize>();
    app.insert_resource(BackdropConfig::default());
    app
}

fn send_cursor(app: &mut App, window: Entity, position: Vec2) {
    app.world_mut().send_event(CursorMoved {
        window,
        position,
        delta: None,
    });
}

#[test]
fn camera_moves_five_percent_toward_pointer_target() {
    let mut app = test_app();
    app.insert_resource(ViewportSize::new(1920.0, 1080.0));
    app.add_systems(Update, (track_pointer, parallax_camera).chain());

    let window = app.world_mut().spawn_empty().id();
    let camera = app
        .world_mut()
        .spawn((Transform::from_xyz(0.0, 0.0, 5.0), BackdropCamera))
        .id();

    // Pointer at the right edge, vertically centred: ndc (1, 0), target (0.5, 0).
    send_cursor(&mut app, window, Vec2::new(1920.0, 540.0));
    app.update();

    let transform = app.world().get::<Transform>(camera).unwrap();
    assert!((transform.translation.x - 0.025).abs() < 1e-6);
    assert_eq!(transform.translation.y, 0.0);

    app.update();
    let transform = app.world().get::<Transform>(camera).unwrap();
    assert!((transform.translation.x - (0.025 + (0.5 - 0.025) * 0.05)).abs() < 1e-6);
}

#[test]
fn camera_converges_to_centre_pointer_without_overshoot() {
    let mut app = test_app();
    app.insert_resource(ViewportSize::new(1920.0, 1080.0));
    app.add_systems(Update, (track_pointer, parallax_camera).chain());

    let window = app.world_mut().spawn_empty().id();
    let camera = app
        .world_mut()
        .spawn((Transform::from_xyz(3.0, -2.0, 5.0), BackdropCamera))
        .id();

    // Viewport centre normalizes to (0, 0), so the camera target is the origin.
    send_cursor(&mut app, window, Vec2::new(960.0, 540.0));

    let mut previous = 3.0_f32;
    for _ in 0..300 {
        app.update();
        let x = app.world().get::<Transform>(camera).unwrap().translation.x;
        assert!(x >= 0.0 && x <= previous);
        previous = x;
    }

    let transform = app.world().get::<Transform>(camera).unwrap();
    assert!(transform.translation.x.abs() < 1e-3);
    assert!(transform.translation.y.abs() < 1e-3);
    assert_eq!(transform.translation.z, 5.0);
}

#[test]
fn resize_updates_aspect_and_viewport_size() {
    let mut app = test_app();
    app.add_systems(Update, handle_viewport_resize);

    let window = app.world_mut().spawn_empty().id();
    let camera = app
        .world_mut()
        .spawn((
            Projection::Perspective(PerspectiveProjection {
                aspect_ratio: 1.0,
                ..default()
            }),
            BackdropCamera,
        ))
        .id();

    for (width, height, aspect) in [(1024.0, 768.0, 4.0 / 3.0), (1920.0, 1080.0, 16.0 / 9.0)] {
        app.world_mut().send_event(WindowResized {
            window,
            width,
            height,
        });
        app.update();

        assert_eq!(
            *app.world().resource::<ViewportSize>(),
            ViewportSize::new(width, height)
        );
        let projection = app.world().get::<Projection>(camera).unwrap();
        let Projection::Perspective(perspective) = projection else {
            panic!("backdrop camera lost its perspective projection");
        };
        assert!((perspective.aspect_ratio - aspect).abs() < 1e-6);
    }
}

#[test]
fn missing_surface_disables_backdrop_without_side_effects() {
    let mut app = test_app();
    app.add_systems(Startup, detect_surface);

    // No window entity exists; startup must not panic and must stop the loop.
    app.update();
    app.update();

    let state = app.world().resource::<State<BackdropState>>();
    assert_eq!(*state.get(), BackdropState::Stopped);

    let mut clouds = app.world_mut().query::<&PointCloud>();
    assert_eq!(clouds.iter(app.world()).count(), 0);
    let mut cameras = app.world_mut().query::<&BackdropCamera>();
    assert_eq!(cameras.iter(app.world()).count(), 0);
}

#[test]
fn present_surface_records_viewport_and_keeps_loading() {
    let mut app = test_app();
    app.add_systems(Startup, detect_surface);

    let mut window = Window::default();
    window.resolution.set(1280.0, 720.0);
    app.world_mut().spawn((window, PrimaryWindow));

    app.update();
    app.update();

    assert_eq!(
        *app.world().resource::<ViewportSize>(),
        ViewportSize::new(1280.0, 720.0)
    );
    let state = app.world().resource::<State<BackdropState>>();
    assert_eq!(*state.get(), BackdropState::Loading);
}

#[test]
fn stop_event_halts_the_animation_loop() {
    let mut app = test_app();
    app.insert_state(BackdropState::Running);
    app.add_systems(
        Update,
        (
            animate_point_cloud.run_if(in_state(BackdropState::Running)),
            handle_stop_events,
        ),
    );

    let cloud = app
        .world_mut()
        .spawn((Transform::default(), PointCloud))
        .id();

    sleep(Duration::from_millis(20));
    app.update();
    let spinning = app.world().get::<Transform>(cloud).unwrap().rotation;
    assert_ne!(spinning, Quat::IDENTITY);

    app.world_mut().send_event(StopBackdrop);
    app.update();
    // The transition applies on the following frame; capture after it.
    app.update();
    let frozen = app.world().get::<Transform>(cloud).unwrap().rotation;

    sleep(Duration::from_millis(20));
    app.update();
    app.update();
    assert_eq!(app.world().get::<Transform>(cloud).unwrap().rotation, frozen);
}

#[test]
fn rotation_tracks_elapsed_time_on_both_axes() {
    let mut app = test_app();
    app.add_systems(Update, animate_point_cloud);

    let cloud = app
        .world_mut()
        .spawn((Transform::default(), PointCloud))
        .id();

    sleep(Duration::from_millis(20));
    app.update();

    let elapsed = app.world().resource::<Time>().elapsed_secs();
    let rotation = app.world().get::<Transform>(cloud).unwrap().rotation;
    let (x, y, _z) = rotation.to_euler(EulerRot::XYZ);
    let angle = elapsed * 0.05;
    assert!((x - angle).abs() < 1e-4);
    assert!((y - angle).abs() < 1e-4);
}
