//! Pointer-reactive particle backdrop and page-decoration systems.
//!
//! The engine renders a rotating 5000-point cloud behind the page content
//! and eases a perspective camera toward the pointer for a parallax effect.
//! Page systems (menu toggle, header shrink, nav highlighting, scroll
//! reveal, card tilt) operate on entities carrying the
//! [`page::classes::StyleClasses`] and [`page::classes::ElementRect`]
//! components supplied by the embedding host; nothing reads ambient global
//! state, so every system can be driven headlessly.

/// Backdrop engine: application setup, point cloud, parallax camera.
pub mod engine;

/// Page-decoration systems mirroring the site's event listeners.
pub mod page;
