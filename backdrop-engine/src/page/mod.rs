//! Page-decoration systems.
//!
//! Each module mirrors one of the site's event listeners: menu toggle,
//! header shrink on scroll, active-nav-link highlighting, scroll reveal and
//! 3D card tilt. The systems are independent and stateless beyond the
//! components they mutate; they share nothing with the particle backdrop.
//!
//! Page elements are plain entities carrying [`classes::StyleClasses`]
//! (a DOM-style classList) and, where geometry matters,
//! [`classes::ElementRect`] in document space. The host spawns the
//! elements; the systems only react.

/// Class-list and element-geometry components shared by the page systems.
pub mod classes;

/// Header padding swap once the page scrolls past the threshold.
pub mod header;

/// Mobile menu toggle button and hidden-class handling.
pub mod menu;

/// Active navigation link highlighting by href basename.
pub mod nav;

/// Scroll-reveal of elements entering the viewport.
pub mod reveal;

/// Page scroll offset tracking from wheel input.
pub mod scroll;

/// 3D tilt hover effect on cards.
pub mod tilt;
