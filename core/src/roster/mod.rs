//! Roster loading
//!
//! A roster is a TOML file with a `[gate]` table and one `[[combatant]]`
//! entry per timer bar. Combatants are fixed for the session.

mod error;
mod loader;

pub use error::RosterError;
pub use loader::{DEMO_ROSTER, demo_roster, load_roster_from_file, parse_roster};
