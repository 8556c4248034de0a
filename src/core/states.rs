//! App state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. For example,
//! player movement only runs in the InGame state, while menu systems
//! only run in the MainMenu state.

use bevy::prelude::*;

/// Top-level app states - controls overall game flow.
///
/// The game transitions between these states based on player actions:
/// - Start in `Loading` to read data files
/// - Move to `MainMenu` when loading completes
/// - Enter `InGame` when the player starts (or restarts) a run
/// - `Summary` shows the win/lose screen once a run ends
///
/// There is intentionally no pause state: a run is a 90-second sprint.
/// Re-entering `InGame` always starts a completely fresh session.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Initial state - loading catalog and config data files
    #[default]
    Loading,
    /// Main menu / title screen
    MainMenu,
    /// Active play session
    InGame,
    /// Win/lose summary screen
    Summary,
}
