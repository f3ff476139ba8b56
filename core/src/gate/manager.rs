//! Turn readiness gate
//!
//! Owns the roster's readiness timers and advances them once per frame.
//! Players whose timer has filled unlock the Fight/Run actions for their
//! room; enemies attack on their own as soon as theirs fills. A player
//! action pauses every timer until a deferred reset fires once
//! `reset_delay` seconds of frame time have been counted down.

use turngate_types::{GateSettings, ReentryPolicy, RoomIndex, RosterConfig};

use super::scheduler::{Deferred, Scheduler};
use super::view::{CombatantView, GateView};
use crate::combatant::{Combatant, CombatantState};
use crate::signals::{ActionKind, GateSignal, SignalHandler};

const ENEMY_FALLBACK_MESSAGE: &str = "ENEMY ATTACK";

/// A completed player action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRecord {
    /// Index into the roster
    pub combatant: usize,
    pub name: String,
    pub action: ActionKind,
    pub message: String,
    pub room: RoomIndex,
    pub slot: usize,
}

impl ActionRecord {
    /// Log line in the `[name] message (room, slot)` form.
    pub fn log_line(&self) -> String {
        format!("[{}] {} ({}, {})", self.name, self.message, self.room, self.slot)
    }
}

#[derive(Debug, Clone)]
pub struct TurnGate<C: Combatant = CombatantState> {
    combatants: Vec<C>,
    /// Position of each player among its room's players (None for enemies)
    slots: Vec<Option<usize>>,

    // ─── Gate state ─────────────────────────────────────────────────────────
    active_room_index: RoomIndex,
    timers_active: bool,
    /// Room whose Fight/Run buttons are currently enabled
    enabled_room: Option<RoomIndex>,

    // ─── Deferred reset ─────────────────────────────────────────────────────
    reset_delay: f32,
    reentry: ReentryPolicy,
    /// Seconds of tick time since the gate was created. Display only; the
    /// deferred reset counts down on its own.
    clock: f64,
    scheduler: Scheduler,

    outbox: Vec<GateSignal>,
}

impl TurnGate<CombatantState> {
    /// Build a gate from a loaded roster.
    pub fn from_roster(roster: &RosterConfig) -> Self {
        let combatants = roster.combatants.iter().map(CombatantState::from).collect();
        Self::new(combatants, &roster.gate)
    }
}

impl<C: Combatant> TurnGate<C> {
    pub fn new(combatants: Vec<C>, settings: &GateSettings) -> Self {
        let slots = assign_slots(&combatants);
        let reset_delay = if settings.reset_delay_secs.is_finite() {
            settings.reset_delay_secs.max(0.0)
        } else {
            0.0
        };

        let mut gate = Self {
            combatants,
            slots,
            active_room_index: 0,
            timers_active: true,
            enabled_room: None,
            reset_delay,
            reentry: settings.reentry,
            clock: 0.0,
            scheduler: Scheduler::new(),
            outbox: Vec::new(),
        };
        gate.active_room_index = gate.clamp_room(settings.initial_room).unwrap_or(0);
        gate
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Session start: zero every timer, disable the buttons, resume timers.
    pub fn init(&mut self) {
        for c in &mut self.combatants {
            c.reset_timer();
        }
        self.scheduler = Scheduler::new();
        self.timers_active = true;
        self.set_enabled_room(None);
        self.outbox.push(GateSignal::Initialized {
            active_room: self.active_room_index,
        });
    }

    /// Advance one frame of `delta_time` seconds.
    pub fn tick(&mut self, delta_time: f32) {
        if !delta_time.is_finite() || delta_time < 0.0 {
            tracing::debug!(delta_time, "ignoring invalid frame delta");
            return;
        }

        self.clock += f64::from(delta_time);

        if self.timers_active {
            for (idx, c) in self.combatants.iter_mut().enumerate() {
                c.advance(delta_time);

                if c.is_enemy() && c.is_ready() {
                    let message = match c.fight_message() {
                        "" => ENEMY_FALLBACK_MESSAGE.to_string(),
                        m => m.to_string(),
                    };
                    tracing::info!(enemy = c.name(), "{}", message);
                    c.reset_timer();
                    self.outbox.push(GateSignal::EnemyActed {
                        combatant: idx,
                        name: c.name().to_string(),
                        message,
                    });
                    self.outbox.push(GateSignal::RefreshRequested);
                }
            }
            self.refresh_actions();
        }

        for callback in self.scheduler.advance(delta_time) {
            tracing::debug!(clock = self.clock, ?callback, "deferred callback fired");
            match callback {
                Deferred::ResetActiveCombatantTimer => self.reset_active_combatant_timer(),
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Complete a player action for `room`.
    ///
    /// Picks the first ready player of the room in roster order. Returns None,
    /// leaving every timer untouched, when nobody in the room is ready or when
    /// a reset is pending under [`ReentryPolicy::Ignore`].
    pub fn try_execute_player_action(
        &mut self,
        room: RoomIndex,
        action: ActionKind,
    ) -> Option<ActionRecord> {
        let pending = self.scheduler.is_pending(Deferred::ResetActiveCombatantTimer);
        if pending && self.reentry == ReentryPolicy::Ignore {
            tracing::debug!(room, %action, "action ignored, timer reset still pending");
            return None;
        }

        let Some(idx) = self.first_ready_player(room) else {
            tracing::debug!(room, %action, "action ignored, no ready player in room");
            return None;
        };
        let slot = self.slots[idx].unwrap_or(0);

        let c = &mut self.combatants[idx];
        let configured = match action {
            ActionKind::Fight => c.fight_message(),
            ActionKind::Run => c.run_message(),
        };
        let message = if configured.is_empty() {
            action.fallback_message(slot)
        } else {
            configured.to_string()
        };
        let record = ActionRecord {
            combatant: idx,
            name: c.name().to_string(),
            action,
            message,
            room,
            slot,
        };
        tracing::info!("{}", record.log_line());
        c.reset_timer();

        self.timers_active = false;
        self.set_enabled_room(None);

        if pending {
            self.scheduler.cancel(Deferred::ResetActiveCombatantTimer);
        }
        self.scheduler
            .schedule(self.reset_delay, Deferred::ResetActiveCombatantTimer);

        self.outbox.push(GateSignal::PlayerActed {
            combatant: record.combatant,
            name: record.name.clone(),
            action,
            message: record.message.clone(),
            room,
            slot,
        });
        self.outbox.push(GateSignal::TimersPaused {
            resume_in: self.reset_delay,
        });

        Some(record)
    }

    /// Deferred half of a player action: zero every player timer in the
    /// active room and resume the timers. Buttons stay disabled until the
    /// next tick recomputes readiness.
    pub fn reset_active_combatant_timer(&mut self) {
        let room = self.active_room_index;
        for c in self
            .combatants
            .iter_mut()
            .filter(|c| !c.is_enemy() && c.room_index() == room)
        {
            c.reset_timer();
        }
        self.timers_active = true;
        self.outbox.push(GateSignal::TimersResumed { room });
        self.outbox.push(GateSignal::RefreshRequested);
    }

    /// Switch which room's players may act. Timers are left alone; button
    /// state follows on the next tick. Returns the effective (clamped) index.
    pub fn set_active_room_index(&mut self, room: RoomIndex) -> RoomIndex {
        let Some(clamped) = self.clamp_room(room) else {
            tracing::error!("no player combatants, cannot set active room index");
            self.active_room_index = 0;
            return 0;
        };
        if clamped != room {
            tracing::debug!(requested = room, clamped, "active room index clamped");
        }

        let from = self.active_room_index;
        self.active_room_index = clamped;
        if from != clamped {
            self.outbox.push(GateSignal::ActiveRoomChanged { from, to: clamped });
            self.outbox.push(GateSignal::RefreshRequested);
        }
        clamped
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn combatants(&self) -> &[C] {
        &self.combatants
    }

    pub fn combatant(&self, idx: usize) -> Option<&C> {
        self.combatants.get(idx)
    }

    pub fn active_room_index(&self) -> RoomIndex {
        self.active_room_index
    }

    pub fn timers_active(&self) -> bool {
        self.timers_active
    }

    pub fn reset_delay(&self) -> f32 {
        self.reset_delay
    }

    pub fn reentry_policy(&self) -> ReentryPolicy {
        self.reentry
    }

    /// Seconds of tick time seen so far
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn is_reset_pending(&self) -> bool {
        self.scheduler.is_pending(Deferred::ResetActiveCombatantTimer)
    }

    /// Whether the Fight/Run buttons of `room` are enabled.
    pub fn actions_enabled(&self, room: RoomIndex) -> bool {
        self.enabled_room == Some(room)
    }

    /// Players in the active room whose timer has filled, as of now.
    pub fn ready_players(&self) -> impl Iterator<Item = (usize, &C)> {
        let room = self.active_room_index;
        self.combatants
            .iter()
            .enumerate()
            .filter(move |(_, c)| !c.is_enemy() && c.room_index() == room && c.is_ready())
    }

    /// Distinct rooms that contain at least one player, ascending.
    pub fn rooms(&self) -> Vec<RoomIndex> {
        let mut rooms: Vec<_> = self
            .combatants
            .iter()
            .filter(|c| !c.is_enemy())
            .map(|c| c.room_index())
            .collect();
        rooms.sort_unstable();
        rooms.dedup();
        rooms
    }

    pub fn view(&self) -> GateView {
        let active = self.active_room_index;
        let combatants = self
            .combatants
            .iter()
            .enumerate()
            .map(|(idx, c)| CombatantView {
                name: c.name().to_string(),
                room: c.room_index(),
                slot: self.slots[idx],
                is_enemy: c.is_enemy(),
                fill_fraction: c.fill_fraction(),
                ready: c.is_ready(),
                visible: c.is_enemy() || c.room_index() == active,
            })
            .collect();

        GateView {
            active_room: active,
            timers_active: self.timers_active,
            actions_enabled: self.actions_enabled(active),
            reset_due_in: self.scheduler.remaining(Deferred::ResetActiveCombatantTimer),
            combatants,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Signals
    // ─────────────────────────────────────────────────────────────────────────

    pub fn drain_signals(&mut self) -> Vec<GateSignal> {
        std::mem::take(&mut self.outbox)
    }

    /// Hand every queued signal to `handler`, emptying the outbox.
    pub fn dispatch_signals<H: SignalHandler + ?Sized>(&mut self, handler: &mut H) {
        let signals = self.drain_signals();
        handler.handle_signals(&signals);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn first_ready_player(&self, room: RoomIndex) -> Option<usize> {
        self.combatants
            .iter()
            .position(|c| !c.is_enemy() && c.room_index() == room && c.is_ready())
    }

    fn refresh_actions(&mut self) {
        let room = self.active_room_index;
        let any_ready = self.first_ready_player(room).is_some();
        self.set_enabled_room(any_ready.then_some(room));
    }

    fn set_enabled_room(&mut self, next: Option<RoomIndex>) {
        if next == self.enabled_room {
            return;
        }
        self.enabled_room = next;
        self.outbox.push(match next {
            Some(room) => GateSignal::ActionsEnabled { room },
            None => GateSignal::ActionsDisabled,
        });
    }

    /// Clamp into `[0, highest player room]`. None when there are no players.
    fn clamp_room(&self, room: RoomIndex) -> Option<RoomIndex> {
        self.combatants
            .iter()
            .filter(|c| !c.is_enemy())
            .map(|c| c.room_index())
            .max()
            .map(|max_room| room.min(max_room))
    }
}

fn assign_slots<C: Combatant>(combatants: &[C]) -> Vec<Option<usize>> {
    let mut per_room = hashbrown::HashMap::<RoomIndex, usize>::new();
    combatants
        .iter()
        .map(|c| {
            if c.is_enemy() {
                return None;
            }
            let next = per_room.entry(c.room_index()).or_insert(0);
            let slot = *next;
            *next += 1;
            Some(slot)
        })
        .collect()
}
