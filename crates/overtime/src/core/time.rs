use std::time::{SystemTime, UNIX_EPOCH};
use crate::api::config::ClockMode;

/// Milliseconds since the Unix epoch according to the system clock.
/// Returns 0.0 if the system clock is set before the epoch.
pub fn system_now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Time source for motion task timestamps, in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct MotionClock {
    mode: ClockMode,
    /// Accumulated frame time (Frame mode only).
    frame_ms: f64,
    /// Wall time source. `SystemTime` natively; the web bridge swaps in `Date.now`.
    wall: fn() -> f64,
}

impl MotionClock {
    pub fn new(mode: ClockMode) -> Self {
        Self {
            mode,
            frame_ms: 0.0,
            wall: system_now_ms,
        }
    }

    /// Wall clock backed by a custom millisecond source.
    pub fn wall_with(source: fn() -> f64) -> Self {
        Self {
            mode: ClockMode::Wall,
            frame_ms: 0.0,
            wall: source,
        }
    }

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Current time in milliseconds.
    pub fn now_ms(&self) -> f64 {
        match self.mode {
            ClockMode::Wall => (self.wall)(),
            ClockMode::Frame => self.frame_ms,
        }
    }

    /// Feed one frame's delta (seconds). Only the frame clock moves.
    pub fn advance(&mut self, dt: f32) {
        if self.mode == ClockMode::Frame {
            self.frame_ms += f64::from(dt) * 1000.0;
        }
    }
}

impl Default for MotionClock {
    fn default() -> Self {
        Self::new(ClockMode::Wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_clock_accumulates_delta() {
        let mut clock = MotionClock::new(ClockMode::Frame);
        assert_eq!(clock.now_ms(), 0.0);
        clock.advance(0.5);
        clock.advance(0.25);
        assert!((clock.now_ms() - 750.0).abs() < 1e-6);
    }

    #[test]
    fn wall_clock_ignores_delta() {
        fn fixed() -> f64 {
            1_000.0
        }
        let mut clock = MotionClock::wall_with(fixed);
        clock.advance(10.0);
        assert_eq!(clock.now_ms(), 1_000.0);
    }

    #[test]
    fn system_clock_is_past_epoch() {
        let clock = MotionClock::default();
        assert!(clock.now_ms() > 0.0);
    }
}
