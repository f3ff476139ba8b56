pub mod combatant;
pub mod context;
pub mod gate;
pub mod roster;
pub mod signals;

// Re-exports for convenience
pub use combatant::{Combatant, CombatantState};
pub use gate::{ActionRecord, CombatantView, GateView, TurnGate};
pub use roster::{RosterError, demo_roster, load_roster_from_file, parse_roster};
pub use signals::{ActionKind, GateSignal, SignalHandler};
pub use turngate_types::{
    CombatantConfig, GateSettings, ReentryPolicy, RoomIndex, RosterConfig,
};
