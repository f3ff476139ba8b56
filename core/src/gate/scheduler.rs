//! Deferred callbacks counted down in frame time
//!
//! Stands in for a delayed engine invoke: each entry carries the seconds
//! left before it fires and is counted down by every tick's delta. Entries
//! are single-shot and fire in the order they were scheduled when due on the
//! same tick.

/// Countdowns within this many seconds of zero are due. Absorbs the rounding
/// of summed fractional frame deltas (e.g. three 0.1s frames against 0.3s).
const DUE_TOLERANCE_SECS: f64 = 1e-6;

/// Callbacks the gate can defer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    ResetActiveCombatantTimer,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    remaining: f64,
    callback: Deferred,
}

#[derive(Debug, Default, Clone)]
pub struct Scheduler {
    entries: Vec<Entry>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `callback` once `delay_secs` of tick time have been counted down.
    pub fn schedule(&mut self, delay_secs: f32, callback: Deferred) {
        self.entries.push(Entry {
            remaining: f64::from(delay_secs.max(0.0)),
            callback,
        });
    }

    /// Drop every pending entry for `callback`, returning how many were removed.
    pub fn cancel(&mut self, callback: Deferred) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.callback != callback);
        before - self.entries.len()
    }

    pub fn is_pending(&self, callback: Deferred) -> bool {
        self.entries.iter().any(|e| e.callback == callback)
    }

    /// Seconds left on the soonest pending entry for `callback`
    pub fn remaining(&self, callback: Deferred) -> Option<f32> {
        self.entries
            .iter()
            .filter(|e| e.callback == callback)
            .map(|e| e.remaining.max(0.0) as f32)
            .reduce(f32::min)
    }

    /// Count every entry down by `delta_time`, then remove and return the
    /// ones that are due, in schedule order.
    pub fn advance(&mut self, delta_time: f32) -> Vec<Deferred> {
        let delta = f64::from(delta_time);
        let mut due = Vec::new();
        self.entries.retain_mut(|e| {
            e.remaining -= delta;
            if e.remaining <= DUE_TOLERANCE_SECS {
                due.push(e.callback);
                false
            } else {
                true
            }
        });
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_single_shot() {
        let mut s = Scheduler::new();
        s.schedule(1.0, Deferred::ResetActiveCombatantTimer);

        assert!(s.advance(0.5).is_empty());
        assert_eq!(s.advance(0.5), vec![Deferred::ResetActiveCombatantTimer]);
        assert!(s.advance(5.0).is_empty());
        assert!(!s.is_pending(Deferred::ResetActiveCombatantTimer));
    }

    #[test]
    fn test_fractional_frames_fire_on_time() {
        let mut s = Scheduler::new();
        s.schedule(0.3, Deferred::ResetActiveCombatantTimer);

        assert!(s.advance(0.1).is_empty());
        assert!(s.advance(0.1).is_empty());
        assert_eq!(s.advance(0.1), vec![Deferred::ResetActiveCombatantTimer]);
    }

    #[test]
    fn test_zero_delay_fires_on_zero_length_frame() {
        let mut s = Scheduler::new();
        s.schedule(0.0, Deferred::ResetActiveCombatantTimer);
        assert_eq!(s.advance(0.0), vec![Deferred::ResetActiveCombatantTimer]);
    }

    #[test]
    fn test_cancel_and_remaining() {
        let mut s = Scheduler::new();
        s.schedule(3.0, Deferred::ResetActiveCombatantTimer);
        s.schedule(2.0, Deferred::ResetActiveCombatantTimer);
        s.advance(0.5);

        assert_eq!(s.remaining(Deferred::ResetActiveCombatantTimer), Some(1.5));
        assert_eq!(s.cancel(Deferred::ResetActiveCombatantTimer), 2);
        assert!(!s.is_pending(Deferred::ResetActiveCombatantTimer));
        assert_eq!(s.remaining(Deferred::ResetActiveCombatantTimer), None);
    }
}
