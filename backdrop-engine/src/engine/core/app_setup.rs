use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::backdrop::material::ParticleMaterial;
use crate::engine::backdrop::point_cloud::{animate_point_cloud, spawn_point_cloud};
use crate::engine::camera::parallax_camera::{
    PointerState, parallax_camera, spawn_backdrop_camera, track_pointer,
};
use crate::engine::camera::viewport::{ViewportSize, handle_viewport_resize};
use crate::engine::core::app_state::{
    BackdropState, StopBackdrop, detect_surface, handle_stop_events,
};
use crate::engine::core::config::{BackdropConfig, ConfigLoader, resolve_config, start_loading};
use crate::engine::core::window_config::create_default_plugins;
use crate::page::header::header_scroll_system;
use crate::page::menu::{MenuToggleEvent, apply_menu_toggle, menu_button_system};
use crate::page::nav::{CurrentPage, mark_active_nav_links};
use crate::page::reveal::reveal_on_scroll;
use crate::page::scroll::{PageScroll, track_page_scroll};
use crate::page::tilt::card_tilt_system;

/// Create the backdrop application with rendering and page-decoration
/// systems wired up.
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<ParticleMaterial>::default())
        .add_plugins(JsonAssetPlugin::<BackdropConfig>::new(&["json"]))
        .insert_resource(ClearColor(Color::NONE));

    app.init_state::<BackdropState>()
        .add_event::<StopBackdrop>()
        .add_event::<MenuToggleEvent>()
        .init_resource::<ConfigLoader>()
        .init_resource::<PointerState>()
        .init_resource::<ViewportSize>()
        .init_resource::<PageScroll>()
        .init_resource::<CurrentPage>()
        .add_systems(Startup, (detect_surface, start_loading).chain())
        .add_systems(
            Update,
            resolve_config.run_if(in_state(BackdropState::Loading)),
        )
        .add_systems(
            OnEnter(BackdropState::Running),
            (spawn_backdrop_camera, spawn_point_cloud),
        )
        .add_systems(
            Update,
            (
                track_pointer,
                handle_viewport_resize,
                animate_point_cloud,
                parallax_camera,
                track_page_scroll,
                header_scroll_system,
                menu_button_system,
                apply_menu_toggle,
                mark_active_nav_links,
                reveal_on_scroll,
                card_tilt_system,
                handle_stop_events,
            )
                .run_if(in_state(BackdropState::Running)),
        );

    app
}
