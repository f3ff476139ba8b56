use std::fmt;

use turngate_types::RoomIndex;

/// The two player actions unlocked by a full timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Fight,
    Run,
}

impl ActionKind {
    /// Message used when the combatant has none configured.
    pub fn fallback_message(self, slot: usize) -> String {
        match self {
            ActionKind::Fight => format!("FIGHT{}", slot + 1),
            ActionKind::Run => format!("RUN{}", slot + 1),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Fight => f.write_str("fight"),
            ActionKind::Run => f.write_str("run"),
        }
    }
}

/// Signals emitted by the TurnGate for its host.
/// These replace direct widget mutation: the host maps them onto sliders,
/// buttons and log output.
#[derive(Debug, Clone, PartialEq)]
pub enum GateSignal {
    /// All timers zeroed and buttons disabled at session start
    Initialized {
        active_room: RoomIndex,
    },

    // Actions
    PlayerActed {
        /// Index into the roster
        combatant: usize,
        name: String,
        action: ActionKind,
        message: String,
        room: RoomIndex,
        slot: usize,
    },
    /// An enemy's timer filled and it attacked on its own
    EnemyActed {
        combatant: usize,
        name: String,
        message: String,
    },

    // Gate state
    TimersPaused {
        /// Seconds of frame time until the reset fires
        resume_in: f32,
    },
    TimersResumed {
        room: RoomIndex,
    },
    ActionsEnabled {
        room: RoomIndex,
    },
    ActionsDisabled,
    ActiveRoomChanged {
        from: RoomIndex,
        to: RoomIndex,
    },

    /// Something visible changed outside the regular per-frame update
    RefreshRequested,
}
