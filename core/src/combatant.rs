//! Combatant model
//!
//! A combatant is anything with a readiness timer: players wait for their
//! timer to fill before the Fight/Run actions unlock, enemies attack on their
//! own as soon as theirs fills.

use turngate_types::{CombatantConfig, RoomIndex};

/// Capability the gate needs from a combatant.
///
/// Hosts with their own entity types can implement this directly; the gate is
/// generic over it. [`CombatantState`] is the stock implementation.
pub trait Combatant {
    fn name(&self) -> &str;
    fn elapsed_time(&self) -> f32;
    fn set_elapsed_time(&mut self, secs: f32);
    fn fill_time(&self) -> f32;
    fn is_enemy(&self) -> bool;
    fn room_index(&self) -> RoomIndex;
    fn fight_message(&self) -> &str;
    fn run_message(&self) -> &str;

    /// A non-positive (or NaN) fill time leaves the timer dormant.
    fn has_valid_fill_time(&self) -> bool {
        let fill = self.fill_time();
        fill.is_finite() && fill > 0.0
    }

    fn is_ready(&self) -> bool {
        self.has_valid_fill_time() && self.elapsed_time() >= self.fill_time()
    }

    /// Timer progress for display, clamped to `[0, 1]`.
    fn fill_fraction(&self) -> f32 {
        if !self.has_valid_fill_time() {
            return 0.0;
        }
        (self.elapsed_time() / self.fill_time()).clamp(0.0, 1.0)
    }

    /// Accumulate one frame. Dormant timers stay pinned at zero.
    fn advance(&mut self, delta_time: f32) {
        if self.has_valid_fill_time() {
            self.set_elapsed_time(self.elapsed_time() + delta_time);
        } else {
            self.set_elapsed_time(0.0);
        }
    }

    fn reset_timer(&mut self) {
        self.set_elapsed_time(0.0);
    }
}

/// Runtime state of one configured combatant.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatantState {
    pub name: String,
    pub elapsed_time: f32,
    pub fill_time: f32,
    pub is_enemy: bool,
    pub room_index: RoomIndex,
    pub fight_message: String,
    pub run_message: String,
}

impl From<&CombatantConfig> for CombatantState {
    fn from(config: &CombatantConfig) -> Self {
        Self {
            name: config.name.clone(),
            elapsed_time: 0.0,
            fill_time: config.fill_time_secs,
            is_enemy: config.enemy,
            room_index: config.room,
            fight_message: config.fight_message.clone(),
            run_message: config.run_message.clone(),
        }
    }
}

impl From<CombatantConfig> for CombatantState {
    fn from(config: CombatantConfig) -> Self {
        Self::from(&config)
    }
}

impl Combatant for CombatantState {
    fn name(&self) -> &str {
        &self.name
    }

    fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    fn set_elapsed_time(&mut self, secs: f32) {
        self.elapsed_time = secs;
    }

    fn fill_time(&self) -> f32 {
        self.fill_time
    }

    fn is_enemy(&self) -> bool {
        self.is_enemy
    }

    fn room_index(&self) -> RoomIndex {
        self.room_index
    }

    fn fight_message(&self) -> &str {
        &self.fight_message
    }

    fn run_message(&self) -> &str {
        &self.run_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight(fill: f32) -> CombatantState {
        CombatantConfig::player("Knight", fill, 0).into()
    }

    #[test]
    fn test_advance_accumulates_until_ready() {
        let mut c = knight(1.0);
        c.advance(0.5);
        assert!(!c.is_ready());
        assert_eq!(c.fill_fraction(), 0.5);

        c.advance(0.75);
        assert!(c.is_ready());
        assert_eq!(c.elapsed_time(), 1.25);
        // Display clamps, storage does not
        assert_eq!(c.fill_fraction(), 1.0);
    }

    #[test]
    fn test_dormant_fill_time_is_pinned() {
        for fill in [0.0, -3.0, f32::NAN] {
            let mut c = knight(fill);
            c.advance(10.0);
            assert_eq!(c.elapsed_time(), 0.0);
            assert_eq!(c.fill_fraction(), 0.0);
            assert!(!c.is_ready());
        }
    }

    #[test]
    fn test_reset_timer() {
        let mut c = knight(2.0);
        c.advance(3.0);
        c.reset_timer();
        assert_eq!(c.elapsed_time(), 0.0);
        assert!(!c.is_ready());
    }
}
