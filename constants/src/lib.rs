//! Shared tuning constants for the backdrop engine.
//!
//! Every magic number from the page scripts lives here under a name, so the
//! renderer and the page-decoration systems never carry inline literals.

/// Particle backdrop tuning: cloud size, spread, motion and camera values.
pub mod backdrop_settings;

/// Page-decoration tuning: scroll thresholds, tilt values and class names.
pub mod page_settings;
