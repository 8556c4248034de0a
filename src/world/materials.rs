//! Material definitions and registry for the store scene.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::catalog::Catalog;

/// Material registry built once per scene, mapping item names to handles.
pub struct MaterialRegistry {
    pub floor: Handle<StandardMaterial>,
    pub wall: Handle<StandardMaterial>,
    pub shelf: Handle<StandardMaterial>,
    items: HashMap<String, Handle<StandardMaterial>>,
    item_fallback: Handle<StandardMaterial>,
}

impl MaterialRegistry {
    pub fn new(materials: &mut Assets<StandardMaterial>, catalog: &Catalog) -> Self {
        // Light linoleum floor
        let floor = materials.add(StandardMaterial {
            base_color: Color::srgb(0.94, 0.94, 0.94),
            perceptual_roughness: 0.9,
            ..default()
        });

        // Off-white walls
        let wall = materials.add(StandardMaterial {
            base_color: Color::srgb(0.88, 0.88, 0.88),
            perceptual_roughness: 0.8,
            ..default()
        });

        // Wooden shelving
        let shelf = materials.add(StandardMaterial {
            base_color: Color::srgb(0.55, 0.27, 0.07),
            perceptual_roughness: 0.7,
            ..default()
        });

        // One material per catalog item, tinted with its display color
        let mut items = HashMap::new();
        for item in catalog.items() {
            items.insert(
                item.name.clone(),
                materials.add(StandardMaterial {
                    base_color: item.color,
                    perceptual_roughness: 0.8,
                    ..default()
                }),
            );
        }

        // Coral fallback for names the catalog does not know
        let item_fallback = materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.42, 0.42),
            perceptual_roughness: 0.8,
            ..default()
        });

        Self {
            floor,
            wall,
            shelf,
            items,
            item_fallback,
        }
    }

    /// Get the material for an item by name.
    pub fn get_item(&self, name: &str) -> Handle<StandardMaterial> {
        self.items
            .get(name)
            .cloned()
            .unwrap_or_else(|| self.item_fallback.clone())
    }
}
