//! Visual configuration loaded from external RON file.
//!
//! Allows tweaking atmosphere and lighting without recompilation.

use bevy::pbr::FogFalloff;
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use serde::Deserialize;
use std::fs;

/// Visual configuration loaded from `assets/data/visual.ron`.
#[derive(Resource, Clone, Deserialize)]
pub struct VisualConfig {
    /// Camera clear color (the "sky" seen over the walls)
    pub clear_color: (f32, f32, f32),
    // Atmosphere
    pub fog_enabled: bool,
    pub fog_color: (f32, f32, f32),
    pub fog_start: f32,
    pub fog_end: f32,
    // Lighting
    pub ambient_brightness: f32,
    pub key_light_lux: f32,
    pub fill_light_lux: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            // Sky blue, matching the fog so distant walls fade out cleanly
            clear_color: (0.53, 0.81, 0.92),
            fog_enabled: true,
            fog_color: (0.53, 0.81, 0.92),
            fog_start: 30.0,
            fog_end: 50.0,
            ambient_brightness: 400.0,
            key_light_lux: 9_000.0,
            fill_light_lux: 5_000.0,
        }
    }
}

impl VisualConfig {
    /// Load visual config from RON file.
    pub fn load() -> Self {
        let path = "assets/data/visual.ron";
        match fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded visual config from {}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    pub fn clear_color_config(&self) -> ClearColorConfig {
        ClearColorConfig::Custom(Color::srgb(
            self.clear_color.0,
            self.clear_color.1,
            self.clear_color.2,
        ))
    }

    /// Fog component for the gameplay camera.
    pub fn distance_fog(&self) -> DistanceFog {
        let falloff = if self.fog_enabled {
            FogFalloff::Linear {
                start: self.fog_start,
                end: self.fog_end,
            }
        } else {
            FogFalloff::Linear {
                start: f32::MAX,
                end: f32::MAX,
            }
        };

        DistanceFog {
            color: Color::srgb(self.fog_color.0, self.fog_color.1, self.fog_color.2),
            falloff,
            ..default()
        }
    }
}

/// System to load visual config at startup.
pub fn load_visual_config(mut commands: Commands) {
    let config = VisualConfig::load();
    commands.insert_resource(config);
}
