use bevy::prelude::*;

use constants::page_settings::{CLASS_ACTIVE_LINK, DEFAULT_PAGE};

use super::classes::StyleClasses;

/// Navigation link element with its target href.
#[derive(Component, Debug, Clone)]
pub struct NavLink {
    pub href: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Path of the page currently being decorated.
#[derive(Resource, Debug, Clone, Default)]
pub struct CurrentPage(pub String);

/// Last segment of a link href. Empty for malformed hrefs, which then never
/// match and simply produce no highlight.
pub fn link_basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

/// Last segment of the location path, defaulting to the index page when the
/// path is empty or ends with a separator.
pub fn page_basename(path: &str) -> &str {
    let name = link_basename(path);
    if name.is_empty() { DEFAULT_PAGE } else { name }
}

/// True when a link's href points at the given page.
pub fn is_active(href: &str, current: &str) -> bool {
    let link = link_basename(href);
    !link.is_empty() && link == page_basename(current)
}

/// Mark newly added nav links whose href matches the current page.
pub fn mark_active_nav_links(
    current: Res<CurrentPage>,
    mut links: Query<(&NavLink, &mut StyleClasses), Added<NavLink>>,
) {
    for (link, mut classes) in &mut links {
        if is_active(&link.href, &current.0) {
            classes.add(CLASS_ACTIVE_LINK);
        }
    }
}
