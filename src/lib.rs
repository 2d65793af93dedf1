//! Team picker: fairness/selection engine with models and selection logic.

pub mod logic;
pub mod models;

pub use logic::{pick_fair, pick_random, split_teams, Picker};
pub use models::{Player, PlayerId, Roster, RosterError};
