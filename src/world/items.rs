//! Item entities - grid placement, idle animation, and despawn on pickup.

use bevy::prelude::*;

use super::builder::StoreGeometry;
use super::materials::MaterialRegistry;
use crate::catalog::GameConfig;
use crate::session::Session;

/// Height above the floor items float at.
const ITEM_HEIGHT: f32 = 1.0;
/// Side length of the item cube.
const ITEM_SIZE: f32 = 0.4;
/// Idle spin speed in radians per second.
const SPIN_SPEED: f32 = 0.6;
/// Amplitude of the idle bob.
const BOB_AMPLITUDE: f32 = 0.05;

/// Pairing of an item name with a fixed spot in the store.
///
/// Created once when the scene is built and never moved; the pickup scan
/// compares player position against these.
#[derive(Component)]
pub struct ItemPlacement {
    pub name: String,
    /// Resting height the bob animation oscillates around.
    pub base_height: f32,
}

/// World position for the item at `index` in the shopping list.
///
/// Items sit on a fixed grid: row-major, `columns` wide, centered on the
/// store origin.
pub fn placement_position(index: usize, columns: usize, rows: usize, spacing: f32) -> Vec3 {
    let col = index % columns;
    let row = index / columns;
    let x = (col as f32 - columns as f32 / 2.0) * spacing;
    let z = (row as f32 - rows as f32 / 2.0) * spacing;
    Vec3::new(x, ITEM_HEIGHT, z)
}

/// Spawn one floating cube per shopping-list item.
pub fn spawn_items(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    mat_registry: &MaterialRegistry,
    config: &GameConfig,
    shopping_list: &[String],
) {
    let mesh = meshes.add(Cuboid::new(ITEM_SIZE, ITEM_SIZE, ITEM_SIZE));

    for (index, name) in shopping_list.iter().enumerate() {
        let position =
            placement_position(index, config.item_columns, config.item_rows, config.item_spacing);

        commands.spawn((
            ItemPlacement {
                name: name.clone(),
                base_height: position.y,
            },
            Mesh3d(mesh.clone()),
            MeshMaterial3d(mat_registry.get_item(name)),
            Transform::from_translation(position),
            StoreGeometry,
        ));
    }
}

/// Slow spin-and-bob so items read as pickups from across the store.
pub fn animate_items(
    time: Res<Time>,
    mut item_query: Query<(&ItemPlacement, &mut Transform)>,
) {
    let elapsed = time.elapsed_secs();
    for (placement, mut transform) in item_query.iter_mut() {
        transform.rotate_y(SPIN_SPEED * time.delta_secs());
        transform.translation.y = placement.base_height + (elapsed * 2.0).sin() * BOB_AMPLITUDE;
    }
}

/// Remove collected items from the scene.
pub fn despawn_found_items(
    mut commands: Commands,
    session: Res<Session>,
    item_query: Query<(Entity, &ItemPlacement)>,
) {
    if !session.is_changed() {
        return;
    }

    for (entity, placement) in item_query.iter() {
        if session.is_found(&placement.name) {
            commands.entity(entity).despawn_recursive();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_follows_the_grid_formula() {
        // 6 columns, 4 rows, spacing 4: index 0 is the top-left cell.
        assert_eq!(placement_position(0, 6, 4, 4.0), Vec3::new(-12.0, 1.0, -8.0));
        // Index 5 ends the first row.
        assert_eq!(placement_position(5, 6, 4, 4.0), Vec3::new(8.0, 1.0, -8.0));
        // Index 6 wraps to the second row.
        assert_eq!(placement_position(6, 6, 4, 4.0), Vec3::new(-12.0, 1.0, -4.0));
        // Index 7 (last of a default 8-item list).
        assert_eq!(placement_position(7, 6, 4, 4.0), Vec3::new(-8.0, 1.0, -4.0));
    }

    #[test]
    fn default_grid_stays_inside_the_store() {
        // Every cell of the full 6x4 grid must be within the playable area
        // (half extent 19 for the default 40-unit store).
        for index in 0..24 {
            let position = placement_position(index, 6, 4, 4.0);
            assert!(position.x.abs() <= 19.0, "x out of bounds at {index}");
            assert!(position.z.abs() <= 19.0, "z out of bounds at {index}");
        }
    }
}
