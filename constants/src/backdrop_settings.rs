use bevy::prelude::*;

/// Number of points in the backdrop cloud.
pub const PARTICLE_COUNT: usize = 5000;

/// Width of the uniform sampling range per axis; every coordinate lands in
/// `[-PARTICLE_SPREAD / 2, PARTICLE_SPREAD / 2]`.
pub const PARTICLE_SPREAD: f32 = 10.0;

/// Rendered point size forwarded to the particle material.
pub const PARTICLE_SIZE: f32 = 0.015;

/// Particle colour, cyan 0x00ffff.
pub const PARTICLE_COLOR: Color = Color::srgb(0.0, 1.0, 1.0);

/// Particle opacity under additive blending.
pub const PARTICLE_OPACITY: f32 = 0.8;

/// Radians per elapsed second applied to both cloud rotation axes.
pub const ROTATION_SPEED: f32 = 0.05;

/// Fraction of the remaining camera-to-target distance covered each frame.
pub const CAMERA_SMOOTHING: f32 = 0.05;

/// Scale mapping normalized pointer coordinates to the camera target.
pub const POINTER_TARGET_SCALE: f32 = 0.5;

/// Vertical field of view of the backdrop camera, degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

/// Near clip plane of the backdrop camera.
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clip plane of the backdrop camera.
pub const CAMERA_FAR: f32 = 1000.0;

/// Camera rest position along the view axis.
pub const CAMERA_DEPTH: f32 = 5.0;
