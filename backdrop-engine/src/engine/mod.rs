//! Particle backdrop engine.
//!
//! Owns the point cloud, the parallax camera and the application lifecycle.
//! All per-frame work is gated on the `Running` lifecycle state so an
//! embedder can cancel the loop with a single event.

/// Application lifecycle, window configuration and config asset loading.
pub mod core;

/// Rotating point cloud: generation, spawning and per-frame animation.
pub mod backdrop;

/// Pointer-tracking parallax camera and viewport resize handling.
pub mod camera;
