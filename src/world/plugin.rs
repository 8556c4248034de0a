//! World plugin - store setup and teardown around each run.

use bevy::prelude::*;

use crate::catalog::{Catalog, GameConfig};
use crate::core::AppState;
use crate::player::{spawn_player, Player, PlayerConfig};
use crate::session::{start_session, Session};

use super::builder::{build_store, StoreGeometry};
use super::items::{animate_items, despawn_found_items, spawn_items};
use super::materials::MaterialRegistry;
use super::visual::{load_visual_config, VisualConfig};

/// World plugin - builds the store scene for each run and tears it down.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_visual_config)
            // The shopping list decides which items exist, so the scene is
            // built after the session
            .add_systems(OnEnter(AppState::InGame), setup_store.after(start_session))
            .add_systems(
                Update,
                (animate_items, despawn_found_items.run_if(resource_exists::<Session>))
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(OnExit(AppState::InGame), cleanup_store);
    }
}

/// Build the store scene and spawn the player for the new run.
fn setup_store(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    catalog: Res<Catalog>,
    config: Res<GameConfig>,
    player_config: Res<PlayerConfig>,
    visual_config: Res<VisualConfig>,
    session: Option<Res<Session>>,
) {
    let Some(session) = session else {
        error!("No session available, store not built");
        return;
    };

    info!("Building store: {} units square", config.store_size);

    let mat_registry = MaterialRegistry::new(&mut materials, &catalog);

    build_store(&mut commands, &mut meshes, &mat_registry, &config, &visual_config);
    spawn_items(
        &mut commands,
        &mut meshes,
        &mat_registry,
        &config,
        session.shopping_list(),
    );

    // Player starts at the store center walkway, at eye height
    spawn_player(
        &mut commands,
        Vec3::new(0.0, player_config.eye_height, 0.0),
        &visual_config,
    );
}

/// Tear down the scene when leaving the run.
fn cleanup_store(
    mut commands: Commands,
    store_query: Query<Entity, With<StoreGeometry>>,
    player_query: Query<Entity, With<Player>>,
) {
    for entity in store_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for entity in player_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
