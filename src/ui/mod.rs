//! UI module - menus, HUD, and the run summary screen.

mod hud;
mod plugin;

pub use hud::format_time;
pub use plugin::UiPlugin;
