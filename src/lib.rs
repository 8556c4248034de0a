//! Grocery Dash - a first-person grocery scavenger hunt in Bevy.
//!
//! The player gets a randomly drawn shopping list and 90 seconds to walk the
//! aisles and collect every item on it.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: App states, global events, fundamental flow systems
//! - **Catalog**: Item catalog and game parameters, loaded from RON data files
//! - **Session**: Shopping list generation and the playing/won/lost state machine
//! - **Player**: First-person movement, camera, proximity item pickup
//! - **World**: Store scene - floor, walls, shelves, lighting, item entities
//! - **Ui**: Main menu, HUD, win/lose summary screen

pub mod catalog;
pub mod core;
pub mod player;
pub mod session;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct GroceryDashPlugin;

impl Plugin for GroceryDashPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Data loading
            .add_plugins(catalog::CatalogPlugin)

            // Session state machine
            .add_plugins(session::SessionPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
