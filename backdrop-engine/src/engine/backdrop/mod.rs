//! Rotating, pointer-reactive point cloud rendered behind the page content.

/// Flat-colour additive material for the particle cloud.
pub mod material;

/// Point cloud generation, spawning and per-frame rotation.
pub mod point_cloud;
