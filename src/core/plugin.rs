//! Core plugin that sets up app states, events, and fundamental systems.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - App states (Loading, MainMenu, InGame, Summary)
/// - Global events (ItemFoundEvent)
/// - Basic app flow systems
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize app states
            .init_state::<AppState>()

            // Register global events
            .add_event::<ItemFoundEvent>()

            // Loading state - data files are read in Startup systems, so by
            // the first state transition everything is in place
            .add_systems(OnEnter(AppState::Loading), transition_to_main_menu)

            // Escape abandons the current run
            .add_systems(
                Update,
                handle_abandon_input.run_if(in_state(AppState::InGame)),
            );
    }
}

/// Transition from Loading to MainMenu once startup loading has run.
fn transition_to_main_menu(mut next_state: ResMut<NextState<AppState>>) {
    next_state.set(AppState::MainMenu);
}

/// Handle Escape to leave the run and return to the main menu.
fn handle_abandon_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(AppState::MainMenu);
    }
}
