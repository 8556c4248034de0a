//! The per-run session state machine.
//!
//! All mutable run state (shopping list, found items, score, clock, phase)
//! lives in one `Session` resource with plain methods, so the rules are
//! testable without an `App`.

use bevy::prelude::*;

/// Where the current run stands.
///
/// `Playing` is initial; `Won` and `Lost` are terminal until the next run
/// starts. There are no other transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Playing,
    /// Every listed item was collected in time.
    Won,
    /// The clock reached zero with items still missing.
    Lost,
}

/// State of a single run, rebuilt from scratch on every restart.
#[derive(Resource, Debug, Clone)]
pub struct Session {
    shopping_list: Vec<String>,
    found: Vec<String>,
    score: u32,
    time_remaining: u32,
    points_per_item: u32,
    phase: SessionPhase,
}

impl Session {
    /// Start a run with a freshly generated shopping list and a full clock.
    pub fn new(shopping_list: Vec<String>, time_limit: u32, points_per_item: u32) -> Self {
        Self {
            shopping_list,
            found: Vec::new(),
            score: 0,
            time_remaining: time_limit,
            points_per_item,
            phase: SessionPhase::Playing,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn shopping_list(&self) -> &[String] {
        &self.shopping_list
    }

    /// Found item names in discovery order.
    pub fn found(&self) -> &[String] {
        &self.found
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_found(&self, name: &str) -> bool {
        self.found.iter().any(|found| found == name)
    }

    /// Record a collected item. Returns true if the item was newly counted.
    ///
    /// Idempotent by contract: repeat notifications for an already-found
    /// item, names not on the list, and anything after the run has ended are
    /// all silent no-ops.
    pub fn record_found(&mut self, name: &str) -> bool {
        if self.phase != SessionPhase::Playing {
            return false;
        }
        if !self.shopping_list.iter().any(|listed| listed == name) {
            return false;
        }
        if self.is_found(name) {
            return false;
        }

        self.found.push(name.to_string());
        self.score += self.points_per_item;

        if self.found.len() == self.shopping_list.len() {
            self.phase = SessionPhase::Won;
        }
        true
    }

    /// Advance the countdown by `seconds` whole seconds.
    ///
    /// Saturates at zero and flips the run to `Lost` when the clock runs out.
    /// Has no effect once the run has ended.
    pub fn tick_seconds(&mut self, seconds: u32) {
        if self.phase != SessionPhase::Playing || seconds == 0 {
            return;
        }

        self.time_remaining = self.time_remaining.saturating_sub(seconds);
        if self.time_remaining == 0 {
            self.phase = SessionPhase::Lost;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(items: &[&str], time_limit: u32) -> Session {
        Session::new(
            items.iter().map(|s| s.to_string()).collect(),
            time_limit,
            100,
        )
    }

    #[test]
    fn finding_an_item_scores_once() {
        let mut session = session_with(&["Milk", "Bread", "Eggs"], 90);

        assert!(session.record_found("Milk"));
        assert!(!session.record_found("Milk"));

        assert_eq!(session.found(), &["Milk".to_string()]);
        assert_eq!(session.score(), 100);
    }

    #[test]
    fn items_off_the_list_are_ignored() {
        let mut session = session_with(&["Milk"], 90);

        assert!(!session.record_found("Caviar"));
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), SessionPhase::Playing);
    }

    #[test]
    fn score_tracks_found_count() {
        let mut session = session_with(&["Milk", "Bread", "Eggs", "Rice"], 90);

        for (i, name) in ["Milk", "Bread", "Eggs"].iter().enumerate() {
            session.record_found(name);
            assert_eq!(session.score(), (i as u32 + 1) * 100);
            assert_eq!(session.score(), session.found().len() as u32 * 100);
        }
    }

    #[test]
    fn collecting_everything_wins_and_stays_won() {
        let mut session = session_with(&["Milk", "Bread"], 90);

        session.record_found("Milk");
        assert_eq!(session.phase(), SessionPhase::Playing);
        session.record_found("Bread");
        assert_eq!(session.phase(), SessionPhase::Won);

        // Terminal: further events change nothing.
        assert!(!session.record_found("Milk"));
        session.tick_seconds(1_000);
        assert_eq!(session.phase(), SessionPhase::Won);
        assert_eq!(session.score(), 200);
        assert_eq!(session.time_remaining(), 90);
    }

    #[test]
    fn running_out_of_time_loses_and_stays_lost() {
        let mut session = session_with(&["Milk", "Bread"], 90);
        session.record_found("Milk");

        for _ in 0..90 {
            session.tick_seconds(1);
        }
        assert_eq!(session.time_remaining(), 0);
        assert_eq!(session.phase(), SessionPhase::Lost);

        // Terminal: late pickups and ticks are no-ops.
        assert!(!session.record_found("Bread"));
        session.tick_seconds(5);
        assert_eq!(session.score(), 100);
        assert_eq!(session.phase(), SessionPhase::Lost);
    }

    #[test]
    fn clock_saturates_on_a_long_stall() {
        let mut session = session_with(&["Milk"], 10);

        session.tick_seconds(99);
        assert_eq!(session.time_remaining(), 0);
        assert_eq!(session.phase(), SessionPhase::Lost);
    }

    #[test]
    fn full_example_run() {
        // 8-item list, collect all 8: Playing -> Won with score 800.
        let names: Vec<String> = (0..8).map(|i| format!("Item{i}")).collect();
        let mut session = Session::new(names.clone(), 90, 100);

        for name in &names {
            session.record_found(name);
        }
        assert_eq!(session.phase(), SessionPhase::Won);
        assert_eq!(session.score(), 800);
    }

    #[test]
    fn fresh_session_is_fully_reset() {
        // A restart is modeled as constructing a new Session.
        let mut old = session_with(&["Milk", "Bread"], 90);
        old.record_found("Milk");
        old.tick_seconds(30);

        let fresh = session_with(&["Eggs", "Rice"], 90);
        assert!(fresh.found().is_empty());
        assert_eq!(fresh.score(), 0);
        assert_eq!(fresh.time_remaining(), 90);
        assert_eq!(fresh.phase(), SessionPhase::Playing);
    }
}
