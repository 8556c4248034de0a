//! Catalog module - item definitions and game parameters.
//!
//! Both the item catalog and the numeric game configuration live in RON data
//! files under `assets/data/`, with compiled-in defaults so the game always
//! starts even when the files are missing or broken.

mod data;
mod error;
mod plugin;

pub use data::{Catalog, CatalogItem, GameConfig};
pub use error::CatalogError;
pub use plugin::CatalogPlugin;
