//! Pure selection algorithms over a roster snapshot.

use crate::models::Player;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick the next cohort by strict fairness.
///
/// 1. Filter out paused players.
/// 2. Sort by the canonical fairness ordering (games asc, id asc).
/// 3. Take the first `min(n, eligible)` players.
///
/// Deterministic: equal inputs always produce equal outputs. Asking for
/// more players than are eligible silently returns them all; `n == 0` or
/// nobody eligible returns an empty cohort.
pub fn pick_fair(players: &[Player], n: usize) -> Vec<Player> {
    let mut eligible: Vec<Player> = players.iter().filter(|p| !p.paused).cloned().collect();
    eligible.sort_by_key(|p| p.fairness_key());
    eligible.truncate(n);
    eligible
}

/// Pick a random cohort among the eligible players.
///
/// Filters out paused players, shuffles the rest (Fisher-Yates via
/// `SliceRandom::shuffle`, so every permutation of the eligible set is
/// equally likely) and takes the first `min(n, eligible)` entries. The
/// generator is a parameter so callers can seed one for reproducible
/// draws.
pub fn pick_random<R: Rng>(players: &[Player], n: usize, rng: &mut R) -> Vec<Player> {
    let mut eligible: Vec<Player> = players.iter().filter(|p| !p.paused).cloned().collect();
    eligible.shuffle(rng);
    eligible.truncate(n);
    eligible
}

/// Split the eligible players into random teams of `team_size`.
///
/// Shuffles uniformly, then chunks; when the count does not divide evenly
/// the last team holds the remainder. Splitting never touches `games`:
/// forming teams is not playing a round. `team_size == 0` or nobody
/// eligible yields no teams.
pub fn split_teams<R: Rng>(players: &[Player], team_size: usize, rng: &mut R) -> Vec<Vec<Player>> {
    if team_size == 0 {
        return Vec::new();
    }
    let mut eligible: Vec<Player> = players.iter().filter(|p| !p.paused).cloned().collect();
    eligible.shuffle(rng);
    eligible.chunks(team_size).map(|chunk| chunk.to_vec()).collect()
}
