//! Pointer-reactive parallax camera for the backdrop scene.

/// Pointer tracking and per-frame camera interpolation.
pub mod parallax_camera;

/// Viewport size resource and resize handling.
pub mod viewport;
