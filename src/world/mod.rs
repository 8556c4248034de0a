//! World module - the store scene: floor, walls, shelves, lights, and items.

mod builder;
mod items;
mod materials;
mod plugin;
mod visual;

pub use builder::StoreGeometry;
pub use items::{placement_position, ItemPlacement};
pub use plugin::WorldPlugin;
pub use visual::VisualConfig;
