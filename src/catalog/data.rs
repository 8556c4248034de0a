//! Catalog and config data structures and RON parsing.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashSet;

use super::error::CatalogError;

// === Catalog ===

/// Raw catalog file structure as read from RON.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    pub items: Vec<CatalogItemDef>,
}

/// Definition of a single item in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItemDef {
    pub name: String,
    /// Display color as `#RRGGBB`.
    pub color: String,
}

/// A resolved catalog item with its parsed display color.
#[derive(Debug, Clone)]
pub struct CatalogItem {
    pub name: String,
    pub color: Color,
}

/// The full item catalog. Items are pure values; the catalog never changes
/// after loading.
#[derive(Resource, Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Parse a catalog from RON file contents, validating names and colors.
    pub fn from_ron(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = ron::from_str(contents)?;
        Self::from_defs(&file.items)
    }

    fn from_defs(defs: &[CatalogItemDef]) -> Result<Self, CatalogError> {
        if defs.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(defs.len());
        for def in defs {
            if !seen.insert(def.name.as_str()) {
                return Err(CatalogError::DuplicateName(def.name.clone()));
            }
            items.push(CatalogItem {
                name: def.name.clone(),
                color: parse_hex_color(&def.color).ok_or_else(|| {
                    CatalogError::InvalidColor {
                        item: def.name.clone(),
                        value: def.color.clone(),
                    }
                })?,
            });
        }

        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Display color for an item, or a fallback for unknown names.
    pub fn color_of(&self, name: &str) -> Color {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.color)
            .unwrap_or(Color::srgb(1.0, 0.42, 0.42))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_defs(&default_item_defs()).expect("built-in catalog is valid")
    }
}

/// Parse a `#RRGGBB` hex color string.
fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    // Byte length and byte-offset slicing below are only sound for ASCII
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::srgb_u8(r, g, b))
}

/// Built-in catalog used when `assets/data/catalog.ron` is missing or broken.
fn default_item_defs() -> Vec<CatalogItemDef> {
    const DEFAULTS: &[(&str, &str)] = &[
        ("Milk", "#FFFFFF"),
        ("Bread", "#D4A574"),
        ("Eggs", "#F5DEB3"),
        ("Cheese", "#FFD700"),
        ("Butter", "#FFEB99"),
        ("Apples", "#FF3333"),
        ("Bananas", "#FFE135"),
        ("Oranges", "#FF8C00"),
        ("Carrots", "#FF6600"),
        ("Tomatoes", "#FF4444"),
        ("Chicken", "#FFE4C4"),
        ("Beef", "#8B0000"),
        ("Fish", "#87CEEB"),
        ("Rice", "#F5F5DC"),
        ("Pasta", "#F4E4C1"),
        ("Cereal", "#CD853F"),
        ("Coffee", "#6F4E37"),
        ("Tea", "#D2691E"),
        ("Sugar", "#FFFFFF"),
        ("Flour", "#FFFAF0"),
        ("Yogurt", "#FFF0F5"),
        ("Juice", "#FFA500"),
        ("Water", "#87CEEB"),
        ("Soda", "#228B22"),
        ("Chips", "#FFD700"),
    ];

    DEFAULTS
        .iter()
        .map(|(name, color)| CatalogItemDef {
            name: (*name).to_string(),
            color: (*color).to_string(),
        })
        .collect()
}

// === Game config ===

fn default_time_limit() -> u32 {
    90
}

fn default_points_per_item() -> u32 {
    100
}

fn default_store_size() -> f32 {
    40.0
}

fn default_list_size() -> usize {
    8
}

fn default_pickup_radius() -> f32 {
    1.0
}

fn default_boundary_margin() -> f32 {
    1.0
}

fn default_item_spacing() -> f32 {
    4.0
}

fn default_item_columns() -> usize {
    6
}

fn default_item_rows() -> usize {
    4
}

fn default_aisle_count() -> usize {
    4
}

/// Numeric game parameters, loaded from `assets/data/config.ron`.
///
/// Every field has a default so a partial (or absent) file still yields a
/// playable configuration.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Session length in seconds.
    #[serde(default = "default_time_limit")]
    pub time_limit: u32,
    /// Score awarded per collected item.
    #[serde(default = "default_points_per_item")]
    pub points_per_item: u32,
    /// Side length of the square store footprint, in world units.
    #[serde(default = "default_store_size")]
    pub store_size: f32,
    /// Number of items drawn onto the shopping list.
    #[serde(default = "default_list_size")]
    pub list_size: usize,
    /// Maximum player-to-item distance that counts as collection.
    #[serde(default = "default_pickup_radius")]
    pub pickup_radius: f32,
    /// Gap kept between the player and the store walls when clamping.
    #[serde(default = "default_boundary_margin")]
    pub boundary_margin: f32,
    /// Distance between adjacent item grid positions.
    #[serde(default = "default_item_spacing")]
    pub item_spacing: f32,
    /// Item grid width.
    #[serde(default = "default_item_columns")]
    pub item_columns: usize,
    /// Item grid depth.
    #[serde(default = "default_item_rows")]
    pub item_rows: usize,
    /// Number of shelf aisles in the store.
    #[serde(default = "default_aisle_count")]
    pub aisle_count: usize,
}

impl GameConfig {
    /// Parse a config from RON file contents.
    pub fn from_ron(contents: &str) -> Result<Self, CatalogError> {
        Ok(ron::from_str(contents)?)
    }

    /// Half the playable area on each horizontal axis; player positions are
    /// clamped to `[-half_extent, half_extent]`.
    pub fn half_extent(&self) -> f32 {
        self.store_size / 2.0 - self.boundary_margin
    }

    /// Repair out-of-range values from a data file.
    ///
    /// The list generator treats an oversized request as an error and the
    /// item grid divides by its column count, so both are clamped here,
    /// once, right after loading.
    pub fn sanitize(&mut self, catalog_len: usize) {
        if self.list_size > catalog_len {
            warn!(
                "Shopping list size {} exceeds catalog size {}, clamping",
                self.list_size, catalog_len
            );
            self.list_size = catalog_len;
        }
        if self.item_columns == 0 {
            warn!("item_columns must be at least 1, clamping");
            self.item_columns = 1;
        }
        if self.item_rows == 0 {
            warn!("item_rows must be at least 1, clamping");
            self.item_rows = 1;
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit: default_time_limit(),
            points_per_item: default_points_per_item(),
            store_size: default_store_size(),
            list_size: default_list_size(),
            pickup_radius: default_pickup_radius(),
            boundary_margin: default_boundary_margin(),
            item_spacing: default_item_spacing(),
            item_columns: default_item_columns(),
            item_rows: default_item_rows(),
            aisle_count: default_aisle_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_25_unique_items() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 25);
        let names: HashSet<&str> = catalog.names().collect();
        assert_eq!(names.len(), 25);
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(
            parse_hex_color("#FF0000"),
            Some(Color::srgb_u8(255, 0, 0))
        );
        assert_eq!(
            parse_hex_color("#87CEEB"),
            Some(Color::srgb_u8(0x87, 0xCE, 0xEB))
        );
        assert_eq!(parse_hex_color("FF0000"), None);
        assert_eq!(parse_hex_color("#FF00"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        // Six bytes but not six ASCII digits; must reject, not panic
        assert_eq!(parse_hex_color("#a\u{ff}\u{ff}b"), None);
    }

    #[test]
    fn catalog_parses_from_ron() {
        let catalog = Catalog::from_ron(
            r##"(items: [(name: "Milk", color: "#FFFFFF"), (name: "Bread", color: "#D4A574")])"##,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.color_of("Milk"), Color::srgb_u8(255, 255, 255));
    }

    #[test]
    fn catalog_rejects_duplicates_and_bad_colors() {
        let dup = Catalog::from_ron(
            r##"(items: [(name: "Milk", color: "#FFFFFF"), (name: "Milk", color: "#000000")])"##,
        );
        assert!(matches!(dup, Err(CatalogError::DuplicateName(_))));

        let bad = Catalog::from_ron(r#"(items: [(name: "Milk", color: "white")])"#);
        assert!(matches!(bad, Err(CatalogError::InvalidColor { .. })));

        let empty = Catalog::from_ron("(items: [])");
        assert!(matches!(empty, Err(CatalogError::Empty)));
    }

    #[test]
    fn config_defaults_match_game_rules() {
        let config = GameConfig::default();
        assert_eq!(config.time_limit, 90);
        assert_eq!(config.points_per_item, 100);
        assert_eq!(config.store_size, 40.0);
        assert_eq!(config.list_size, 8);
        assert_eq!(config.half_extent(), 19.0);
    }

    #[test]
    fn sanitize_repairs_degenerate_config_values() {
        let mut config =
            GameConfig::from_ron("(list_size: 99, item_columns: 0, item_rows: 0)").unwrap();
        config.sanitize(25);
        assert_eq!(config.list_size, 25);
        assert_eq!(config.item_columns, 1);
        assert_eq!(config.item_rows, 1);

        // In-range values pass through untouched.
        let mut config = GameConfig::default();
        config.sanitize(25);
        assert_eq!(config.list_size, 8);
        assert_eq!(config.item_columns, 6);
        assert_eq!(config.item_rows, 4);
    }

    #[test]
    fn partial_config_file_fills_in_defaults() {
        let config = GameConfig::from_ron("(time_limit: 120)").unwrap();
        assert_eq!(config.time_limit, 120);
        assert_eq!(config.points_per_item, 100);
        assert_eq!(config.list_size, 8);
    }
}
