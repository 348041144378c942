use std::time::{Duration, Instant};

/// Timing snapshot attached to a published frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time since the previous publish (or since the clock started, for the
    /// first one), clamped to the clock's bounds.
    pub dt: Duration,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Zero-based publish counter for the current loop run.
    pub frame_index: u64,
}

/// Produces [`FrameTime`] snapshots, one per publish.
///
/// Delta time is clamped so a receiver pacing its display on `dt` never sees
/// zero after back-to-back publishes, nor a huge step after a stalled script.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Default clamps: 100µs to 250ms.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Number of ticks taken so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .max(self.dt_min)
            .min(self.dt_max);

        self.last = now;
        let ft = FrameTime { dt, now, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn ticks_count_up_from_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn timestamps_are_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(b.now >= a.now);
    }

    // ── clamping ──────────────────────────────────────────────────────────

    #[test]
    fn stall_is_capped_at_max() {
        let mut clock = FrameClock::with_clamps(Duration::ZERO, Duration::from_millis(5));
        thread::sleep(Duration::from_millis(30));
        assert_eq!(clock.tick().dt, Duration::from_millis(5));
    }

    #[test]
    fn default_max_is_quarter_second() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(300));
        assert_eq!(clock.tick().dt, Duration::from_millis(250));
    }

    #[test]
    fn back_to_back_ticks_are_raised_to_min() {
        let mut clock = FrameClock::with_clamps(Duration::from_secs(1), Duration::from_secs(2));
        clock.tick();
        assert_eq!(clock.tick().dt, Duration::from_secs(1));
    }
}
