//! Grocery Dash - Entry Point
//!
//! A first-person grocery store scavenger hunt: grab everything on your
//! shopping list before the clock runs out.
//!
//! Controls:
//! - WASD: Move
//! - Mouse: Look around
//! - Escape: Abandon the run and return to the menu

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Grocery Dash".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(grocery_dash::GroceryDashPlugin)

        .run();
}
