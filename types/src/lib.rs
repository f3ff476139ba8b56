//! Shared configuration types for the turn readiness gate
//!
//! This crate contains the serializable roster and application settings that
//! are shared between the gate (turngate-core) and its hosts (turngate-cli).

use serde::{Deserialize, Serialize};

/// Key partitioning combatants into groups. Only the active room's players may act.
pub type RoomIndex = u32;

// ─────────────────────────────────────────────────────────────────────────────
// Gate Settings
// ─────────────────────────────────────────────────────────────────────────────

/// What happens when a player action arrives while a timer reset is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReentryPolicy {
    /// Refuse the action; at most one reset is ever pending
    #[default]
    Ignore,
    /// Accept the action and reschedule the pending reset from now
    Replace,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateSettings {
    /// Seconds between a player action and the room timer reset
    #[serde(default)]
    pub reset_delay_secs: f32,
    /// Room whose players may act when the gate starts
    #[serde(default)]
    pub initial_room: RoomIndex,
    #[serde(default)]
    pub reentry: ReentryPolicy,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            reset_delay_secs: 0.0,
            initial_room: 0,
            reentry: ReentryPolicy::Ignore,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Roster
// ─────────────────────────────────────────────────────────────────────────────

/// One combatant as authored in a roster file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantConfig {
    pub name: String,
    /// Seconds for the readiness timer to fill. Non-positive values leave the
    /// combatant dormant.
    #[serde(default = "default_fill_time")]
    pub fill_time_secs: f32,
    #[serde(default)]
    pub enemy: bool,
    #[serde(default)]
    pub room: RoomIndex,
    /// Empty falls back to `FIGHT<slot>`
    #[serde(default)]
    pub fight_message: String,
    /// Empty falls back to `RUN<slot>`
    #[serde(default)]
    pub run_message: String,
}

impl CombatantConfig {
    pub fn player(name: impl Into<String>, fill_time_secs: f32, room: RoomIndex) -> Self {
        Self {
            name: name.into(),
            fill_time_secs,
            enemy: false,
            room,
            fight_message: String::new(),
            run_message: String::new(),
        }
    }

    pub fn enemy(name: impl Into<String>, fill_time_secs: f32) -> Self {
        Self {
            name: name.into(),
            fill_time_secs,
            enemy: true,
            room: 0,
            fight_message: String::new(),
            run_message: String::new(),
        }
    }

    pub fn with_messages(mut self, fight: impl Into<String>, run: impl Into<String>) -> Self {
        self.fight_message = fight.into();
        self.run_message = run.into();
        self
    }
}

/// A complete roster file: gate settings plus the fixed list of combatants.
///
/// ```toml
/// [gate]
/// reset_delay_secs = 0.5
///
/// [[combatant]]
/// name = "Knight"
/// fill_time_secs = 3.0
/// room = 0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub gate: GateSettings,
    #[serde(default, rename = "combatant")]
    pub combatants: Vec<CombatantConfig>,
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

/// How the host paces frames when running the gate unattended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Sleep between frames at wall-clock speed
    Realtime,
    /// Step frames back to back on a virtual clock
    #[default]
    Accelerated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Frame length in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default)]
    pub mode: RunMode,
    /// Roster loaded when none is given on the command line
    #[serde(default)]
    pub last_roster: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            mode: RunMode::default(),
            last_roster: None,
        }
    }
}

impl AppConfig {
    /// Frame length in seconds, as fed to the gate's tick.
    pub fn tick_secs(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }
}

fn default_fill_time() -> f32 {
    5.0
}

fn default_tick_ms() -> u64 {
    16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_defaults_fill_in() {
        let roster: RosterConfig = toml::from_str(
            r#"
            [[combatant]]
            name = "Knight"

            [[combatant]]
            name = "Goblin"
            enemy = true
            fill_time_secs = 2.5
            "#,
        )
        .unwrap();

        assert_eq!(roster.gate, GateSettings::default());
        assert_eq!(roster.combatants.len(), 2);
        assert_eq!(roster.combatants[0].fill_time_secs, 5.0);
        assert_eq!(roster.combatants[0].room, 0);
        assert!(!roster.combatants[0].enemy);
        assert!(roster.combatants[1].enemy);
    }

    #[test]
    fn reentry_policy_is_snake_case() {
        let settings: GateSettings = toml::from_str("reentry = \"replace\"").unwrap();
        assert_eq!(settings.reentry, ReentryPolicy::Replace);
    }

    #[test]
    fn tick_secs_converts_millis() {
        let config = AppConfig {
            tick_ms: 250,
            ..AppConfig::default()
        };
        assert_eq!(config.tick_secs(), 0.25);
    }
}
