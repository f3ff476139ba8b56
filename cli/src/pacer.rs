//! Frame pacing for unattended runs
//!
//! Supports two modes:
//! - Realtime: wait on a tokio interval so frames land at wall-clock speed
//! - Accelerated: step frames back to back, tracking virtual time only

use std::time::Duration;

use tokio::time::{Interval, MissedTickBehavior};
use turngate_core::context::RunMode;

#[derive(Debug)]
pub struct FramePacer {
    mode: RunMode,
    frame: Duration,
    /// Created on first use, inside the runtime
    interval: Option<Interval>,
    /// Seconds of frames stepped so far
    elapsed: f64,
}

impl FramePacer {
    pub fn new(mode: RunMode, tick_ms: u64) -> Self {
        Self {
            mode,
            frame: Duration::from_millis(tick_ms.max(1)),
            interval: None,
            elapsed: 0.0,
        }
    }

    /// Frame delta fed to the gate
    pub fn frame_secs(&self) -> f32 {
        self.frame.as_secs_f32()
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Whole frames needed to cover `seconds`, rounded up.
    pub fn frames_for(&self, seconds: f32) -> u64 {
        if !seconds.is_finite() || seconds <= 0.0 {
            return 0;
        }
        (seconds / self.frame_secs()).ceil() as u64
    }

    /// Wait for the next frame boundary (no-op when accelerated).
    pub async fn next_frame(&mut self) {
        if self.mode == RunMode::Realtime {
            let frame = self.frame;
            let interval = self.interval.get_or_insert_with(|| {
                let mut interval = tokio::time::interval(frame);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                interval
            });
            interval.tick().await;
        }
        self.elapsed += self.frame.as_secs_f64();
    }

    /// Total frame time paced since this pacer was created
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
    }
}

/// Format seconds as MM:SS.ss
pub fn format_clock(secs: f64) -> String {
    let secs = secs.max(0.0);
    let mins = (secs / 60.0).floor() as u32;
    let secs_remainder = secs % 60.0;
    format!("{:02}:{:05.2}", mins, secs_remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_for_rounds_up() {
        let pacer = FramePacer::new(RunMode::Accelerated, 250);
        assert_eq!(pacer.frame_secs(), 0.25);
        assert_eq!(pacer.frames_for(1.0), 4);
        assert_eq!(pacer.frames_for(1.1), 5);
        assert_eq!(pacer.frames_for(0.0), 0);
        assert_eq!(pacer.frames_for(-3.0), 0);
    }

    #[test]
    fn test_zero_tick_is_bumped() {
        let pacer = FramePacer::new(RunMode::Accelerated, 0);
        assert_eq!(pacer.frame_secs(), 0.001);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(15.23), "00:15.23");
        assert_eq!(format_clock(165.5), "02:45.50");
    }

    #[tokio::test]
    async fn test_accelerated_frames_do_not_wait() {
        let mut pacer = FramePacer::new(RunMode::Accelerated, 500);
        for _ in 0..4 {
            pacer.next_frame().await;
        }
        assert_eq!(pacer.elapsed_secs(), 2.0);
    }
}
