//! Console rendering of gate signals and state

use std::io::Write;

use turngate_core::{GateSignal, GateView, SignalHandler};

use crate::pacer::format_clock;

const BAR_WIDTH: usize = 20;

/// Prints gate signals as they are dispatched.
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    /// Print enable/disable/refresh chatter too
    pub verbose: bool,
}

impl ConsolePresenter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Console line for a signal, or None when it is not shown.
    pub fn describe(&self, signal: &GateSignal) -> Option<String> {
        let line = match signal {
            GateSignal::PlayerActed {
                name,
                message,
                room,
                slot,
                ..
            } => format!("[{name}] {message} ({room}, {slot})"),
            GateSignal::EnemyActed { name, message, .. } => format!("!! {name}: {message}"),
            GateSignal::TimersPaused { resume_in } => {
                format!("timers paused for {resume_in:.2}s")
            }
            GateSignal::TimersResumed { room } => format!("timers resumed (room {room} reset)"),
            GateSignal::ActiveRoomChanged { from, to } => format!("active room {from} -> {to}"),
            GateSignal::Initialized { active_room } => {
                format!("battle started in room {active_room}")
            }
            GateSignal::ActionsEnabled { room } if self.verbose => {
                format!("room {room}: fight/run enabled")
            }
            GateSignal::ActionsDisabled if self.verbose => "fight/run disabled".to_string(),
            GateSignal::RefreshRequested if self.verbose => "refresh".to_string(),
            _ => return None,
        };
        Some(line)
    }
}

impl SignalHandler for ConsolePresenter {
    fn handle_signal(&mut self, signal: &GateSignal) {
        if let Some(line) = self.describe(signal) {
            println!("{line}");
        }
    }
}

/// Render the gate view as a block of text. `ready` lists the active room's
/// players that can act right now.
pub fn render_view(view: &GateView, clock: f64, ready: &[&str]) -> String {
    let mut out = Vec::new();
    let _ = writeln!(
        out,
        "{}  room {}  timers {}  actions {}",
        format_clock(clock),
        view.active_room,
        if view.timers_active { "running" } else { "paused" },
        if view.actions_enabled { "enabled" } else { "disabled" },
    );
    for c in view.visible() {
        let tag = match c.slot {
            Some(slot) => format!("r{}s{}", c.room, slot),
            None => "enemy".to_string(),
        };
        let _ = writeln!(
            out,
            "  {:<12} {:<6} {} {:>3.0}%{}",
            c.name,
            tag,
            GateView::bar(c.fill_fraction, BAR_WIDTH),
            c.fill_fraction * 100.0,
            if c.ready { " READY" } else { "" },
        );
    }
    if !ready.is_empty() {
        let _ = writeln!(out, "  ready: {}", ready.join(", "));
    }
    if let Some(due) = view.reset_due_in {
        let _ = writeln!(out, "  reset due in {due:.2}s");
    }
    String::from_utf8_lossy(&out).into_owned()
}
