//! Display snapshot of the gate
//!
//! Hosts render from this instead of poking widgets from inside the gate:
//! one timer bar per combatant plus the action button state.

use turngate_types::RoomIndex;

/// One timer bar.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatantView {
    pub name: String,
    pub room: RoomIndex,
    /// Position among the room's players. None for enemies.
    pub slot: Option<usize>,
    pub is_enemy: bool,
    /// Timer progress clamped to `[0, 1]`
    pub fill_fraction: f32,
    pub ready: bool,
    /// Enemies are always shown, players only when their room is active
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GateView {
    pub active_room: RoomIndex,
    pub timers_active: bool,
    /// Fight/Run buttons for the active room
    pub actions_enabled: bool,
    /// Seconds left before the pending reset fires, if any
    pub reset_due_in: Option<f32>,
    pub combatants: Vec<CombatantView>,
}

impl GateView {
    pub fn visible(&self) -> impl Iterator<Item = &CombatantView> {
        self.combatants.iter().filter(|c| c.visible)
    }

    /// Render a fill fraction as a fixed-width text bar.
    pub fn bar(fraction: f32, width: usize) -> String {
        let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }
}
