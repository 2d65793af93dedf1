//! Picker engine: the session object the presentation layer drives.

use crate::logic::selection::{pick_fair, pick_random};
use crate::models::{Player, PlayerId, Roster, RosterError};
use std::sync::Arc;

/// Composition root: one roster plus the last selection result.
///
/// The roster lives behind an [`Arc`]; [`Picker::snapshot`] hands that
/// handle out, and every mutation goes through [`Arc::make_mut`], which
/// clones the roster only while a snapshot is actually shared. A caller
/// holding an earlier snapshot therefore never observes a change, and an
/// unshared engine mutates in place without copying.
#[derive(Clone, Debug, Default)]
pub struct Picker {
    roster: Arc<Roster>,
    last_picks: Vec<Player>,
}

impl Picker {
    /// Create an engine with an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player; returns the assigned id.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, RosterError> {
        Arc::make_mut(&mut self.roster).add_player(name)
    }

    /// Remove a player (absent id: no-op).
    pub fn remove_player(&mut self, id: PlayerId) {
        Arc::make_mut(&mut self.roster).remove_player(id);
    }

    /// Set a player's games counter (absent id: no-op; negatives kept).
    pub fn set_player_games(&mut self, id: PlayerId, games: i32) {
        Arc::make_mut(&mut self.roster).set_player_games(id, games);
    }

    /// Relabel a player (absent id: no-op).
    pub fn set_player_name(&mut self, id: PlayerId, name: impl Into<String>) {
        Arc::make_mut(&mut self.roster).set_player_name(id, name);
    }

    /// Toggle a player's paused flag (absent id: no-op).
    pub fn toggle_paused(&mut self, id: PlayerId) {
        Arc::make_mut(&mut self.roster).toggle_player_paused(id);
    }

    /// Empty the roster. The id counter keeps counting.
    pub fn clear(&mut self) {
        Arc::make_mut(&mut self.roster).clear();
    }

    /// Zero every games counter (paused flags and identity untouched).
    pub fn reset_all_games(&mut self) {
        Arc::make_mut(&mut self.roster).reset_all_games();
    }

    /// Pick the next cohort and count it as played.
    ///
    /// Selects with [`pick_fair`] (or [`pick_random`] when `use_random`
    /// is set), then credits one game to every selected player on a
    /// single new roster value: select, bulk-increment, publish. No
    /// partially-incremented state is ever observable; snapshots taken
    /// before the call keep the old counts, and the returned players
    /// carry the incremented ones.
    pub fn pick_next(&mut self, n: usize, use_random: bool) -> Vec<Player> {
        let players = self.roster.players();
        let picked = if use_random {
            pick_random(&players, n, &mut rand::thread_rng())
        } else {
            pick_fair(&players, n)
        };
        let ids: Vec<PlayerId> = picked.iter().map(|p| p.id).collect();
        if !ids.is_empty() {
            Arc::make_mut(&mut self.roster).record_games(&ids);
        }
        // Report from the published roster so counts match what a fresh
        // snapshot shows, preserving pick order.
        let picked: Vec<Player> = ids
            .iter()
            .filter_map(|id| self.roster.player(*id).cloned())
            .collect();
        self.last_picks = picked.clone();
        picked
    }

    /// Current roster in canonical fairness order.
    pub fn current_roster(&self) -> Vec<Player> {
        self.roster.players()
    }

    /// The most recent pick result (with post-increment counts).
    pub fn last_picks(&self) -> &[Player] {
        &self.last_picks
    }

    /// Cheap immutable handle on the current roster. The contents behind
    /// a captured handle never change: mutations publish new values.
    pub fn snapshot(&self) -> Arc<Roster> {
        Arc::clone(&self.roster)
    }
}
