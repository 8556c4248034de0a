//! Catalog plugin - loads item and config data files at startup.

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use super::data::{Catalog, GameConfig};

/// Catalog plugin - reads `assets/data/*.ron` into resources.
///
/// Loading never fails the app: bad or missing files are logged and replaced
/// by the compiled-in defaults.
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_catalog, load_game_config).chain());
    }
}

/// Load the item catalog from `assets/data/catalog.ron`.
fn load_catalog(mut commands: Commands) {
    let path = Path::new("assets/data/catalog.ron");

    let catalog = if path.exists() {
        match fs::read_to_string(path) {
            Ok(contents) => match Catalog::from_ron(&contents) {
                Ok(catalog) => {
                    info!("Loaded catalog: {} items", catalog.len());
                    catalog
                }
                Err(e) => {
                    error!("Failed to parse catalog {:?}: {}", path, e);
                    Catalog::default()
                }
            },
            Err(e) => {
                error!("Failed to read catalog file {:?}: {}", path, e);
                Catalog::default()
            }
        }
    } else {
        warn!("Catalog file not found: {:?}, using built-in items", path);
        Catalog::default()
    };

    commands.insert_resource(catalog);
}

/// Load game parameters from `assets/data/config.ron`.
///
/// Runs after `load_catalog` so the list size can be sanity-checked against
/// the catalog: the list generator treats an oversized request as an error,
/// so a bad data file must not be able to ask for one.
fn load_game_config(mut commands: Commands, catalog: Res<Catalog>) {
    let path = Path::new("assets/data/config.ron");

    let mut config = if path.exists() {
        match fs::read_to_string(path) {
            Ok(contents) => match GameConfig::from_ron(&contents) {
                Ok(config) => {
                    info!("Loaded game config");
                    config
                }
                Err(e) => {
                    error!("Failed to parse config {:?}: {}", path, e);
                    GameConfig::default()
                }
            },
            Err(e) => {
                error!("Failed to read config file {:?}: {}", path, e);
                GameConfig::default()
            }
        }
    } else {
        warn!("Config file not found: {:?}, using defaults", path);
        GameConfig::default()
    };

    config.sanitize(catalog.len());

    commands.insert_resource(config);
}
