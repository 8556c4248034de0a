//! Store construction - floor, perimeter walls, shelf aisles, and lighting.

use bevy::prelude::*;

use super::materials::MaterialRegistry;
use crate::catalog::GameConfig;
use crate::world::VisualConfig;

/// Marker for all store scenery that should be cleaned up with the run.
#[derive(Component)]
pub struct StoreGeometry;

const WALL_HEIGHT: f32 = 4.0;
const WALL_THICKNESS: f32 = 0.5;
const FLOOR_DEPTH: f32 = 0.2;
const SHELF_WIDTH: f32 = 3.0;
const SHELF_DEPTH: f32 = 0.3;
const AISLE_PITCH: f32 = 4.0;
/// Z positions of the shelf units along each aisle.
const SHELF_ROWS: [f32; 3] = [-6.0, 0.0, 6.0];

/// Build the store shell and furniture.
pub fn build_store(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    mat_registry: &MaterialRegistry,
    config: &GameConfig,
    visual_config: &VisualConfig,
) {
    spawn_floor(commands, meshes, mat_registry, config);
    spawn_perimeter_walls(commands, meshes, mat_registry, config);
    spawn_shelf_aisles(commands, meshes, mat_registry, config);
    spawn_lights(commands, visual_config);
}

/// Floor slab covering the store footprint.
fn spawn_floor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    mat_registry: &MaterialRegistry,
    config: &GameConfig,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(config.store_size, FLOOR_DEPTH, config.store_size))),
        MeshMaterial3d(mat_registry.floor.clone()),
        Transform::from_xyz(0.0, -FLOOR_DEPTH / 2.0, 0.0),
        StoreGeometry,
    ));
}

/// Four walls around the store footprint.
fn spawn_perimeter_walls(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    mat_registry: &MaterialRegistry,
    config: &GameConfig,
) {
    let half = config.store_size / 2.0;
    let wall_y = WALL_HEIGHT / 2.0;

    // (position, dimensions) for north/south then west/east walls
    let walls = [
        (
            Vec3::new(0.0, wall_y, -half),
            Vec3::new(config.store_size, WALL_HEIGHT, WALL_THICKNESS),
        ),
        (
            Vec3::new(0.0, wall_y, half),
            Vec3::new(config.store_size, WALL_HEIGHT, WALL_THICKNESS),
        ),
        (
            Vec3::new(-half, wall_y, 0.0),
            Vec3::new(WALL_THICKNESS, WALL_HEIGHT, config.store_size),
        ),
        (
            Vec3::new(half, wall_y, 0.0),
            Vec3::new(WALL_THICKNESS, WALL_HEIGHT, config.store_size),
        ),
    ];

    for (position, size) in walls {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(mat_registry.wall.clone()),
            Transform::from_translation(position),
            StoreGeometry,
        ));
    }
}

/// Rows of shelf units forming the aisles.
fn spawn_shelf_aisles(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    mat_registry: &MaterialRegistry,
    config: &GameConfig,
) {
    for x in aisle_positions(config.aisle_count) {
        for z in SHELF_ROWS {
            spawn_shelf_unit(commands, meshes, mat_registry, Vec3::new(x, 0.0, z));
        }
    }
}

/// X coordinates of the aisles, symmetric around a central walkway.
fn aisle_positions(count: usize) -> Vec<f32> {
    let half = (count / 2) as i32;
    (0..count as i32)
        .map(|i| {
            let offset = i - half;
            if offset >= 0 {
                (offset + 1) as f32 * AISLE_PITCH
            } else {
                offset as f32 * AISLE_PITCH
            }
        })
        .collect()
}

/// One three-tier shelf unit: a solid base and two thin boards.
fn spawn_shelf_unit(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    mat_registry: &MaterialRegistry,
    position: Vec3,
) {
    // (center height, board thickness)
    let tiers = [(0.5, 1.0), (1.0, 0.1), (1.5, 0.1)];

    for (y, thickness) in tiers {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(SHELF_WIDTH, thickness, SHELF_DEPTH))),
            MeshMaterial3d(mat_registry.shelf.clone()),
            Transform::from_xyz(position.x, position.y + y, position.z),
            StoreGeometry,
        ));
    }
}

/// Bright, even supermarket lighting: two angled key lights plus a ceiling
/// point light.
fn spawn_lights(commands: &mut Commands, visual_config: &VisualConfig) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: visual_config.ambient_brightness,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: visual_config.key_light_lux,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        StoreGeometry,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: visual_config.fill_light_lux,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-10.0, 20.0, -10.0).looking_at(Vec3::ZERO, Vec3::Y),
        StoreGeometry,
    ));

    commands.spawn((
        PointLight {
            intensity: 1_000_000.0,
            range: 40.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 10.0, 0.0),
        StoreGeometry,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aisles_leave_a_central_walkway() {
        // Four aisles straddle the item grid, none on the center line.
        assert_eq!(aisle_positions(4), vec![-8.0, -4.0, 4.0, 8.0]);
        assert!(!aisle_positions(4).contains(&0.0));
    }

    #[test]
    fn aisle_layout_is_symmetric_for_even_counts() {
        let positions = aisle_positions(6);
        assert_eq!(positions, vec![-12.0, -8.0, -4.0, 4.0, 8.0, 12.0]);
    }
}
