//! Player module - first-person movement, camera, and item pickup.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::{clamp_to_bounds, spawn_player, wish_direction, MoveInput, PlayerCamera};
pub use plugin::PlayerPlugin;
