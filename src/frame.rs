//! Frame scheduling for the render pass.
//!
//! Frames are strictly serial: the next one is due only after the previous
//! one has been reported as rendered and the frame interval has elapsed.

use std::time::Duration;
use web_time::Instant;

/// Fixed-rate render clock.
#[derive(Debug)]
pub struct FrameClock {
    /// Target time between frames.
    interval: Duration,

    /// When the last frame finished rendering.
    last_frame: Option<Instant>,

    /// Number of frames rendered so far.
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock targeting `frames_per_second` (clamped to at least 1).
    pub fn new(frames_per_second: u32) -> Self {
        let fps = frames_per_second.max(1);
        Self {
            interval: Duration::from_secs(1) / fps,
            last_frame: None,
            frame_count: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Check whether a frame is due at `now`.
    pub fn should_render(&self, now: Instant) -> bool {
        match self.last_frame {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    /// Record that a frame finished at `now`.
    pub fn frame_rendered(&mut self, now: Instant) {
        self.last_frame = Some(now);
        self.frame_count += 1;
        log::trace!("Frame {} rendered", self.frame_count);
    }

    /// Time left until the next frame is due.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        match self.last_frame {
            None => Duration::ZERO,
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_FRAME_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_due_immediately() {
        let clock = FrameClock::new(60);
        let now = Instant::now();
        assert!(clock.should_render(now));
        assert_eq!(clock.time_until_next(now), Duration::ZERO);
    }

    #[test]
    fn test_next_frame_waits_for_interval() {
        let mut clock = FrameClock::new(50);
        assert_eq!(clock.interval(), Duration::from_millis(20));

        let start = Instant::now();
        clock.frame_rendered(start);
        assert!(!clock.should_render(start + Duration::from_millis(5)));
        assert_eq!(
            clock.time_until_next(start + Duration::from_millis(5)),
            Duration::from_millis(15)
        );
        assert!(clock.should_render(start + Duration::from_millis(20)));
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_zero_rate_is_clamped() {
        assert_eq!(FrameClock::new(0).interval(), Duration::from_secs(1));
    }
}
