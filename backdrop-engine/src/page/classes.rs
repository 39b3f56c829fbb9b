use bevy::prelude::*;
use std::collections::HashSet;

/// Presentational class list on a page element, mirroring a DOM classList.
#[derive(Component, Debug, Clone, Default)]
pub struct StyleClasses(HashSet<String>);

impl StyleClasses {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(classes.into_iter().map(Into::into).collect())
    }

    /// Add a class; returns true when it was newly added.
    pub fn add(&mut self, class: &str) -> bool {
        self.0.insert(class.to_owned())
    }

    /// Remove a class; returns true when it was present.
    pub fn remove(&mut self, class: &str) -> bool {
        self.0.remove(class)
    }

    /// Toggle a class and report whether it is present afterwards.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.0.remove(class) {
            false
        } else {
            self.0.insert(class.to_owned());
            true
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }
}

/// Document-space rectangle of a page element. Supplied by the host layout
/// rather than queried from ambient global state.
#[derive(Component, Debug, Clone, Copy)]
pub struct ElementRect(pub Rect);

impl ElementRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self(Rect::new(x, y, x + width, y + height))
    }
}
