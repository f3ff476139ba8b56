use turngate_core::context::AppConfig;
use turngate_core::{RosterConfig, TurnGate};

use crate::pacer::FramePacer;
use crate::presenter::ConsolePresenter;

/// Holds all state for the CLI session.
/// The gate is owned here and driven only from the REPL task.
pub struct CliContext {
    pub config: AppConfig,
    pub gate: TurnGate,
    pub presenter: ConsolePresenter,
    pub pacer: FramePacer,
    /// Where the current roster came from, for display
    pub roster_source: String,
}

impl CliContext {
    pub fn new(config: AppConfig, roster: &RosterConfig, roster_source: String, verbose: bool) -> Self {
        let pacer = FramePacer::new(config.mode, config.tick_ms);
        let mut ctx = Self {
            config,
            gate: TurnGate::from_roster(roster),
            presenter: ConsolePresenter::new(verbose),
            pacer,
            roster_source,
        };
        ctx.gate.init();
        ctx.flush();
        ctx
    }

    /// Swap in a new roster and restart the battle.
    pub fn replace_roster(&mut self, roster: &RosterConfig, roster_source: String) {
        self.gate = TurnGate::from_roster(roster);
        self.roster_source = roster_source;
        self.gate.init();
        self.flush();
    }

    /// Rebuild the pacer after a config change.
    pub fn reset_pacer(&mut self) {
        self.pacer = FramePacer::new(self.config.mode, self.config.tick_ms);
    }

    /// Print every queued gate signal.
    pub fn flush(&mut self) {
        self.gate.dispatch_signals(&mut self.presenter);
    }
}
