use bevy::prelude::*;

use constants::page_settings::CLASS_HIDDEN;

use super::classes::StyleClasses;

/// Marker for the mobile menu toggle button.
#[derive(Component)]
pub struct MobileMenuButton;

/// Marker for the collapsible mobile menu element.
#[derive(Component)]
pub struct MobileMenu;

/// Fired whenever the menu button is pressed.
#[derive(Event, Default)]
pub struct MenuToggleEvent;

/// Emit a toggle event when the menu button is pressed.
pub fn menu_button_system(
    buttons: Query<&Interaction, (Changed<Interaction>, With<MobileMenuButton>)>,
    mut toggle_events: EventWriter<MenuToggleEvent>,
) {
    for interaction in &buttons {
        if *interaction == Interaction::Pressed {
            toggle_events.write(MenuToggleEvent);
        }
    }
}

/// Toggle the menu's hidden class and keep its visibility in sync.
pub fn apply_menu_toggle(
    mut toggle_events: EventReader<MenuToggleEvent>,
    mut menus: Query<(&mut StyleClasses, &mut Visibility), With<MobileMenu>>,
) {
    for _ in toggle_events.read() {
        for (mut classes, mut visibility) in &mut menus {
            let hidden = classes.toggle(CLASS_HIDDEN);
            *visibility = if hidden {
                Visibility::Hidden
            } else {
                Visibility::Inherited
            };
        }
    }
}
