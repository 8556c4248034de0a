//! Session module - shopping list generation and the run state machine.

mod list;
mod plugin;
mod state;

pub use list::{generate_shopping_list, SessionError};
pub use plugin::{session_is_playing, start_session, CountdownTimer, SessionPlugin};
pub use state::{Session, SessionPhase};
