//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. The player's pickup scan
//! sends ItemFoundEvents, and the session system receives them to update
//! the list, score, and win condition. This keeps systems independent and
//! testable.

use bevy::prelude::*;

/// Sent when the player walks within pickup range of an uncollected item.
///
/// The session system is the single idempotency point: duplicate events for
/// an already-found item are silently ignored there, so emitters do not need
/// to deduplicate.
#[derive(Event)]
pub struct ItemFoundEvent {
    /// Catalog name of the item that was reached.
    pub name: String,
}
