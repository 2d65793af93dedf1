//! Roster: id-keyed player collection with monotonic identity assignment.

use crate::models::player::{Player, PlayerId};
use std::collections::HashMap;

/// Errors that can occur during roster operations.
///
/// Deliberately small: operations naming an absent id are quiet no-ops
/// (the boundary may race a remove against a toggle), so only genuinely
/// bad input is an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// Player name is empty after trimming.
    EmptyName,
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::EmptyName => write!(f, "player name must not be empty"),
        }
    }
}

/// The full roster: players keyed by id, plus the id counter.
///
/// Insertion order is irrelevant; consumers always re-sort through
/// [`Roster::players`]. Cloning a roster yields a fully independent copy
/// (same players, same counter), which is what the engine publishes new
/// values from.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    /// Most recently assigned id; the next player gets `current_id + 1`.
    /// Never decremented, even when players are removed or cleared.
    current_id: PlayerId,
    players: HashMap<PlayerId, Player>,
}

impl Roster {
    /// Create an empty roster. The first added player gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player with the given name; returns the assigned id.
    /// The name is trimmed; an empty result is rejected.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, RosterError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        self.current_id += 1;
        let id = self.current_id;
        self.players.insert(id, Player::new(id, name));
        Ok(id)
    }

    /// Remove a player by id. Absent ids are ignored; remaining players
    /// keep their ids (no renumbering).
    pub fn remove_player(&mut self, id: PlayerId) {
        if self.players.remove(&id).is_none() {
            log::debug!("remove_player: id {} not on roster, ignoring", id);
        }
    }

    /// Set a player's games counter. Negative values are stored verbatim
    /// (they sort ahead of zero, i.e. the player is "owed" rounds).
    pub fn set_player_games(&mut self, id: PlayerId, games: i32) {
        match self.players.get_mut(&id) {
            Some(player) => player.set_games(games),
            None => log::debug!("set_player_games: id {} not on roster, ignoring", id),
        }
    }

    /// Relabel a player. Any string is accepted here; the non-empty rule
    /// binds only at the add boundary.
    pub fn set_player_name(&mut self, id: PlayerId, name: impl Into<String>) {
        match self.players.get_mut(&id) {
            Some(player) => player.set_name(name),
            None => log::debug!("set_player_name: id {} not on roster, ignoring", id),
        }
    }

    /// Flip a player's paused flag. Absent ids are ignored.
    pub fn toggle_player_paused(&mut self, id: PlayerId) {
        match self.players.get_mut(&id) {
            Some(player) => player.toggle_paused(),
            None => log::debug!("toggle_player_paused: id {} not on roster, ignoring", id),
        }
    }

    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// All players sorted by the canonical fairness ordering (games
    /// ascending, id ascending). This is both the display order and the
    /// basis for fair selection; the id tie-break keeps equal game counts
    /// in a reproducible order.
    pub fn players(&self) -> Vec<Player> {
        let mut players: Vec<Player> = self.players.values().cloned().collect();
        players.sort_by_key(|p| p.fairness_key());
        players
    }

    /// Credit one played round to every listed player in a single pass.
    /// Ids not on the roster are skipped.
    pub fn record_games(&mut self, ids: &[PlayerId]) {
        for id in ids {
            if let Some(player) = self.players.get_mut(id) {
                player.record_game();
            }
        }
    }

    /// Remove every player. The id counter is not reset: ids stay unique
    /// across the roster's whole lifetime, even through a clear.
    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// Zero every games counter, leaving names, paused flags and identity
    /// untouched.
    pub fn reset_all_games(&mut self) {
        for player in self.players.values_mut() {
            player.set_games(0);
        }
    }

    /// Number of players on the roster (paused included).
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Most recently assigned id (0 when nothing was ever added).
    pub fn current_id(&self) -> PlayerId {
        self.current_id
    }
}
