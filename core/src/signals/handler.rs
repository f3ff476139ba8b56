use super::signal::GateSignal;

/// Trait for systems that react to gate signals.
/// Implement this for presenters, audio cues, widget bindings, etc.
pub trait SignalHandler {
    /// Handle a single signal.
    fn handle_signal(&mut self, signal: &GateSignal);

    /// Handle multiple signals (default implementation calls handle_signal for each)
    fn handle_signals(&mut self, signals: &[GateSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}

/// Collecting handler, handy for hosts that render once per frame.
impl SignalHandler for Vec<GateSignal> {
    fn handle_signal(&mut self, signal: &GateSignal) {
        self.push(signal.clone());
    }
}
