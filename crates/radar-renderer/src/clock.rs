//! Frame timing: seconds elapsed between draw-frame callbacks.

use std::time::Instant;

/// Tracks the time between frames.
///
/// The first frame after construction or [`FrameClock::reset`] reports a
/// zero delta, so a paused or freshly mounted view never jumps.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a new frame at `now` and return seconds since the previous one.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last_frame.replace(now) else {
            return 0.0;
        };
        now.saturating_duration_since(last).as_secs_f32()
    }

    /// Forget the last frame timestamp.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}
