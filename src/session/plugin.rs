//! Session plugin - wires the run state machine into the app schedule.

use bevy::prelude::*;

use crate::catalog::{Catalog, GameConfig};
use crate::core::{AppState, ItemFoundEvent};

use super::list::generate_shopping_list;
use super::state::{Session, SessionPhase};

/// Repeating one-second timer driving the countdown.
///
/// The session decrements by the number of whole seconds elapsed each frame
/// rather than once per callback, so a stalled frame cannot make the clock
/// drift.
#[derive(Resource)]
pub struct CountdownTimer(pub Timer);

impl Default for CountdownTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(1.0, TimerMode::Repeating))
    }
}

/// Run condition: a session exists and is still in its Playing phase.
///
/// Gating the countdown and pickup systems on this is what stops the timer
/// from being scheduled once a terminal phase is reached.
pub fn session_is_playing(session: Option<Res<Session>>) -> bool {
    session.is_some_and(|session| session.phase() == SessionPhase::Playing)
}

/// Session plugin - creates a fresh session per run and reacts to pickups
/// and clock ticks.
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app
            // Entering InGame is the restart operation: everything about the
            // previous run is discarded.
            .add_systems(OnEnter(AppState::InGame), start_session)
            .add_systems(
                Update,
                (
                    apply_item_found,
                    advance_countdown.run_if(session_is_playing),
                    check_run_over,
                )
                    .chain()
                    .run_if(in_state(AppState::InGame))
                    .run_if(resource_exists::<Session>),
            );
    }
}

/// Build a fresh session from the catalog and config.
///
/// Public so the world plugin can order its scene build after the session
/// (the item entities come from the session's shopping list).
pub fn start_session(mut commands: Commands, catalog: Res<Catalog>, config: Res<GameConfig>) {
    let mut rng = rand::thread_rng();
    let shopping_list = match generate_shopping_list(&catalog, config.list_size, &mut rng) {
        Ok(list) => list,
        Err(e) => {
            // Config loading clamps the list size, so this is unreachable
            // with resources built through the catalog plugin.
            error!("Could not generate shopping list: {}", e);
            return;
        }
    };

    info!(
        "Session started: {} items, {} seconds",
        shopping_list.len(),
        config.time_limit
    );

    commands.insert_resource(Session::new(
        shopping_list,
        config.time_limit,
        config.points_per_item,
    ));
    commands.insert_resource(CountdownTimer::default());
}

/// Apply pickup events to the session.
fn apply_item_found(mut events: EventReader<ItemFoundEvent>, mut session: ResMut<Session>) {
    for event in events.read() {
        if session.record_found(&event.name) {
            info!(
                "Found {} ({}/{})",
                event.name,
                session.found().len(),
                session.shopping_list().len()
            );
        }
    }
}

/// Advance the countdown by however many whole seconds elapsed this frame.
fn advance_countdown(
    time: Res<Time>,
    mut timer: ResMut<CountdownTimer>,
    mut session: ResMut<Session>,
) {
    timer.0.tick(time.delta());
    let elapsed = timer.0.times_finished_this_tick();
    if elapsed > 0 {
        session.tick_seconds(elapsed);
    }
}

/// Move to the summary screen once the run has ended.
fn check_run_over(session: Res<Session>, mut next_state: ResMut<NextState<AppState>>) {
    match session.phase() {
        SessionPhase::Playing => {}
        SessionPhase::Won => {
            info!("Run won with score {}", session.score());
            next_state.set(AppState::Summary);
        }
        SessionPhase::Lost => {
            info!(
                "Run lost: {}/{} items found",
                session.found().len(),
                session.shopping_list().len()
            );
            next_state.set(AppState::Summary);
        }
    }
}
