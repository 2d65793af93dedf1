//! Selection logic: pure picks over a snapshot, plus the session engine.

mod picker;
mod selection;

pub use picker::Picker;
pub use selection::{pick_fair, pick_random, split_teams};
