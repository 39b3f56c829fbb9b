use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::backdrop_settings::{
    CAMERA_SMOOTHING, PARTICLE_COUNT, PARTICLE_OPACITY, PARTICLE_SPREAD, ROTATION_SPEED,
};

use crate::engine::core::app_state::BackdropState;

/// Asset path of the optional tuning overrides, relative to `assets/`.
pub const CONFIG_ASSET_PATH: &str = "backdrop.json";

/// Runtime-tunable backdrop parameters, loadable from `backdrop.json`.
/// A missing file or missing fields fall back to the compiled defaults.
#[derive(Resource, Debug, Clone, Serialize, Deserialize, Asset, TypePath)]
pub struct BackdropConfig {
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,
    #[serde(default = "default_spread")]
    pub spread: f32,
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,
    #[serde(default = "default_smoothing")]
    pub smoothing: f32,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            spread: PARTICLE_SPREAD,
            rotation_speed: ROTATION_SPEED,
            smoothing: CAMERA_SMOOTHING,
            opacity: PARTICLE_OPACITY,
        }
    }
}

fn default_particle_count() -> usize {
    PARTICLE_COUNT
}

fn default_spread() -> f32 {
    PARTICLE_SPREAD
}

fn default_rotation_speed() -> f32 {
    ROTATION_SPEED
}

fn default_smoothing() -> f32 {
    CAMERA_SMOOTHING
}

fn default_opacity() -> f32 {
    PARTICLE_OPACITY
}

/// Tracks the in-flight config asset load during the `Loading` state.
#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<BackdropConfig>>,
}

/// Kick off the config asset load.
pub fn start_loading(mut loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    loader.handle = Some(asset_server.load(CONFIG_ASSET_PATH));
}

/// Resolve the config once its load settles, then enter `Running`.
/// Load failure is not an error, the compiled defaults apply.
pub fn resolve_config(
    loader: Res<ConfigLoader>,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<BackdropConfig>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<BackdropState>>,
) {
    let Some(ref handle) = loader.handle else {
        return;
    };

    match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => {
            if let Some(config) = configs.get(handle) {
                info!("✓ Backdrop config loaded");
                commands.insert_resource(config.clone());
                next_state.set(BackdropState::Running);
            }
        }
        Some(LoadState::Failed(_)) => {
            warn!("Backdrop config missing or unreadable, using defaults");
            commands.insert_resource(BackdropConfig::default());
            next_state.set(BackdropState::Running);
        }
        _ => {}
    }
}
