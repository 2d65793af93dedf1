//! Player data structure and its per-player stats.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player. Assigned by the roster, strictly
/// increasing, never reused within one roster's lifetime.
pub type PlayerId = u32;

/// A player on the roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Rounds played counter (can go negative when games are adjusted by
    /// hand to "owe" a player rounds; negative sorts ahead of zero).
    pub games: i32,
    /// Paused players stay on the roster and keep their count, but are
    /// skipped by every selection.
    pub paused: bool,
}

impl Player {
    /// Create a player with the given id and name. Counters start at zero,
    /// not paused.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            games: 0,
            paused: false,
        }
    }

    /// Canonical fairness ordering key: fewest games first, lowest
    /// (oldest) id breaks ties.
    pub fn fairness_key(&self) -> (i32, PlayerId) {
        (self.games, self.id)
    }

    /// Record that this player played one round.
    pub fn record_game(&mut self) {
        self.games += 1;
    }

    /// Set the games counter directly (negative values kept verbatim).
    pub fn set_games(&mut self, games: i32) {
        self.games = games;
    }

    /// Relabel the player.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Flip the paused flag.
    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }
}
