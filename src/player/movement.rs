//! First-person player movement, camera control, and proximity pickup.
//!
//! The per-tick math lives in pure functions (`wish_direction`,
//! `clamp_to_bounds`) so the movement contract can be tested without
//! spinning up an `App`; the Bevy systems around them only shuttle input
//! and transforms.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use std::f32::consts::FRAC_PI_2;

use super::components::*;
use crate::catalog::GameConfig;
use crate::core::{AppState, ItemFoundEvent};
use crate::session::{session_is_playing, Session};
use crate::world::{ItemPlacement, VisualConfig};

/// Marker component for the player's camera.
#[derive(Component, Default)]
pub struct PlayerCamera {
    /// Current pitch angle in radians (looking up/down)
    pub pitch: f32,
}

/// Snapshot of the held movement keys for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            forward: keyboard.pressed(KeyCode::KeyW),
            backward: keyboard.pressed(KeyCode::KeyS),
            left: keyboard.pressed(KeyCode::KeyA),
            right: keyboard.pressed(KeyCode::KeyD),
        }
    }
}

/// Horizontal world-space direction the player wants to move in.
///
/// Held keys combine in camera-local space (opposite keys cancel), the
/// result is normalized so diagonals are not faster, then rotated by the
/// facing yaw. Pitch never contributes to movement.
pub fn wish_direction(input: MoveInput, yaw: f32) -> Vec3 {
    let mut direction = Vec3::ZERO;
    if input.forward {
        direction.z -= 1.0;
    }
    if input.backward {
        direction.z += 1.0;
    }
    if input.left {
        direction.x -= 1.0;
    }
    if input.right {
        direction.x += 1.0;
    }

    if direction == Vec3::ZERO {
        return Vec3::ZERO;
    }

    Quat::from_rotation_y(yaw) * direction.normalize()
}

/// Clamp both horizontal coordinates to the store footprint.
pub fn clamp_to_bounds(mut position: Vec3, half_extent: f32) -> Vec3 {
    position.x = position.x.clamp(-half_extent, half_extent);
    position.z = position.z.clamp(-half_extent, half_extent);
    position
}

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(OnEnter(AppState::InGame), grab_cursor)
        .add_systems(OnExit(AppState::InGame), release_cursor)
        .add_systems(
            Update,
            (mouse_look, player_movement, pickup_items)
                .chain()
                .run_if(in_state(AppState::InGame))
                .run_if(session_is_playing),
        );
}

/// Grab and hide cursor when entering gameplay.
fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release cursor when leaving gameplay.
fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// Handle mouse movement for looking around.
///
/// Rotates the player entity horizontally (yaw) and the camera vertically
/// (pitch). The camera is a child of the player, so horizontal rotation
/// affects both.
fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    config: Res<PlayerConfig>,
    mut player_query: Query<&mut Transform, With<Player>>,
    mut camera_query: Query<(&mut Transform, &mut PlayerCamera), (With<Camera3d>, Without<Player>)>,
) {
    // Accumulate mouse movement
    let mut delta = Vec2::ZERO;
    for event in mouse_motion.read() {
        delta += event.delta;
    }

    if delta == Vec2::ZERO {
        return;
    }

    let Ok(mut player_transform) = player_query.get_single_mut() else {
        return;
    };
    let Ok((mut camera_transform, mut camera)) = camera_query.get_single_mut() else {
        return;
    };

    let sensitivity = config.mouse_sensitivity * 0.001;
    let y_invert = if config.invert_y { -1.0 } else { 1.0 };

    // Rotate player horizontally (yaw)
    player_transform.rotate_y(-delta.x * sensitivity);

    // Rotate camera vertically (pitch), clamped to straight up/down so the
    // view cannot invert
    camera.pitch -= delta.y * sensitivity * y_invert;
    camera.pitch = camera.pitch.clamp(-FRAC_PI_2, FRAC_PI_2);

    camera_transform.rotation = Quat::from_rotation_x(camera.pitch);
}

/// Handle WASD movement with store-bounds clamping.
fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    player_config: Res<PlayerConfig>,
    game_config: Res<GameConfig>,
    mut player_query: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut transform) = player_query.get_single_mut() else {
        return;
    };

    let input = MoveInput::from_keyboard(&keyboard);
    let yaw = transform.rotation.to_euler(EulerRot::YXZ).0;
    let direction = wish_direction(input, yaw);
    if direction == Vec3::ZERO {
        return;
    }

    let step = direction * player_config.move_speed * time.delta_secs();
    transform.translation =
        clamp_to_bounds(transform.translation + step, game_config.half_extent());
}

/// Scan uncollected items and emit pickup events for any in reach.
///
/// The session deduplicates, so this system only filters out items it
/// already knows are found to keep the scan short.
fn pickup_items(
    game_config: Res<GameConfig>,
    session: Res<Session>,
    player_query: Query<&Transform, With<Player>>,
    item_query: Query<(&ItemPlacement, &Transform), Without<Player>>,
    mut events: EventWriter<ItemFoundEvent>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };

    for (placement, item_transform) in item_query.iter() {
        if session.is_found(&placement.name) {
            continue;
        }

        let distance = player_transform
            .translation
            .distance(item_transform.translation);
        if distance < game_config.pickup_radius {
            events.send(ItemFoundEvent {
                name: placement.name.clone(),
            });
        }
    }
}

/// Spawn the player entity with its first-person camera.
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec3,
    visual_config: &VisualConfig,
) -> Entity {
    let player = commands
        .spawn((
            Player,
            Transform::from_translation(position),
            GlobalTransform::default(),
            Visibility::default(),
        ))
        .id();

    // Spawn camera as child of player, at the player's origin (the player
    // transform already sits at eye height)
    commands.entity(player).with_children(|parent| {
        parent.spawn((
            Camera3d::default(),
            Camera {
                clear_color: visual_config.clear_color_config(),
                ..default()
            },
            // Soft distance haze toward the store walls
            visual_config.distance_fog(),
            PlayerCamera::default(),
            Transform::default(),
        ));
    });

    player
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn opposite_keys_cancel() {
        let input = MoveInput {
            forward: true,
            backward: true,
            left: false,
            right: false,
        };
        assert_eq!(wish_direction(input, 0.0), Vec3::ZERO);
    }

    #[test]
    fn diagonal_is_not_faster() {
        let input = MoveInput {
            forward: true,
            backward: false,
            left: false,
            right: true,
        };
        let direction = wish_direction(input, 0.0);
        assert!((direction.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn yaw_rotates_the_direction() {
        let forward = MoveInput {
            forward: true,
            ..Default::default()
        };

        // Facing down -Z (yaw 0), forward is -Z.
        let ahead = wish_direction(forward, 0.0);
        assert!((ahead - Vec3::NEG_Z).length() < EPS);

        // Quarter turn left: forward becomes -X.
        let turned = wish_direction(forward, FRAC_PI_2);
        assert!((turned - Vec3::NEG_X).length() < EPS);

        // Movement never gains a vertical component.
        assert!(turned.y.abs() < EPS);
    }

    #[test]
    fn any_key_sequence_stays_inside_the_store() {
        let half_extent = 19.0;
        let mut position = Vec3::new(0.0, 1.6, 0.0);

        // Hammer the bounds from varying angles for a while.
        let inputs = [
            MoveInput { forward: true, ..Default::default() },
            MoveInput { forward: true, right: true, ..Default::default() },
            MoveInput { backward: true, left: true, ..Default::default() },
            MoveInput { left: true, ..Default::default() },
        ];
        for step in 0..10_000 {
            let input = inputs[step % inputs.len()];
            let yaw = (step as f32) * 0.37;
            let direction = wish_direction(input, yaw);
            position = clamp_to_bounds(position + direction * 0.6, half_extent);

            assert!(position.x >= -half_extent && position.x <= half_extent);
            assert!(position.z >= -half_extent && position.z <= half_extent);
            assert_eq!(position.y, 1.6);
        }
    }

    #[test]
    fn clamp_is_identity_inside_bounds() {
        let position = Vec3::new(3.0, 1.6, -7.5);
        assert_eq!(clamp_to_bounds(position, 19.0), position);
    }
}
