//! Data structures for the picker: players and the roster that owns them.

mod player;
mod roster;

pub use player::{Player, PlayerId};
pub use roster::{Roster, RosterError};
