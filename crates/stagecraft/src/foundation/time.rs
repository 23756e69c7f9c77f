//! Frame timing

use std::time::{Duration, Instant};

/// Timing snapshot for a single rendered frame
///
/// Produced by [`FrameClock::tick`] once per rendered frame and handed to
/// layers through the render context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    /// Scheduling slot index since clock start
    ///
    /// Computed from elapsed time and the render step, so skipped frames
    /// leave gaps. The first rendered frame is always slot 0.
    pub frame_number: u64,

    /// Time since the previous rendered frame (zero on the first frame)
    pub delta_time: Duration,

    /// Time since the clock was created
    pub total_time: Duration,

    /// Instantaneous frames per second
    ///
    /// Zero on the first frame and whenever `delta_time` is zero.
    pub fps: f32,
}

/// Monotonic clock that stamps rendered frames
///
/// The clock is pure with respect to its inputs: `tick` derives everything
/// from the start instant captured at construction, the instant passed in,
/// and the time since the last render. Wall-clock adjustments never affect
/// it because `Instant` is monotonic.
pub struct FrameClock {
    started_at: Instant,
    render_step: Duration,
}

impl FrameClock {
    /// Create a clock starting now
    ///
    /// `render_step` is the intended minimum time between rendered frames
    /// and defines the width of a frame-number slot.
    pub fn new(render_step: Duration) -> Self {
        Self {
            started_at: Instant::now(),
            render_step,
        }
    }

    /// Instant the clock started
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Configured render step
    pub fn render_step(&self) -> Duration {
        self.render_step
    }

    /// Stamp a rendered frame
    ///
    /// # Arguments
    /// * `now` - Current instant
    /// * `since_last_render` - Time since the previous rendered frame
    /// * `first_frame` - Whether this is the first rendered frame
    pub fn tick(&self, now: Instant, since_last_render: Duration, first_frame: bool) -> FrameInfo {
        let total_time = now.duration_since(self.started_at);

        let frame_number = if first_frame {
            0
        } else {
            let step_ms = self.render_step.as_millis();
            let elapsed_ms = total_time.as_millis();
            // A zero step means "render every iteration"; elapsed
            // milliseconds keep the numbering monotone in that case.
            let slot = if step_ms == 0 {
                elapsed_ms
            } else {
                elapsed_ms / step_ms
            };
            slot as u64
        };

        let fps = if first_frame || since_last_render.is_zero() {
            0.0
        } else {
            1.0 / since_last_render.as_secs_f32()
        };

        FrameInfo {
            frame_number,
            delta_time: since_last_render,
            total_time,
            fps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_frame_is_slot_zero() {
        let clock = FrameClock::new(Duration::from_millis(33));
        let now = clock.started_at() + Duration::from_millis(500);

        let info = clock.tick(now, Duration::ZERO, true);

        assert_eq!(info.frame_number, 0);
        assert_eq!(info.fps, 0.0);
        assert_eq!(info.delta_time, Duration::ZERO);
    }

    #[test]
    fn test_frame_number_from_elapsed_time() {
        let clock = FrameClock::new(Duration::from_millis(33));
        let now = clock.started_at() + Duration::from_millis(100);

        let info = clock.tick(now, Duration::from_millis(33), false);

        assert_eq!(info.frame_number, 3);
        assert_eq!(info.total_time, Duration::from_millis(100));
    }

    #[test]
    fn test_frame_number_with_zero_step_uses_elapsed_millis() {
        let clock = FrameClock::new(Duration::ZERO);
        let now = clock.started_at() + Duration::from_millis(42);

        let info = clock.tick(now, Duration::from_millis(1), false);

        assert_eq!(info.frame_number, 42);
    }

    #[test]
    fn test_fps_from_delta() {
        let clock = FrameClock::new(Duration::from_millis(33));
        let now = clock.started_at() + Duration::from_millis(50);

        let info = clock.tick(now, Duration::from_micros(16_670), false);

        assert_relative_eq!(info.fps, 59.988, epsilon = 0.01);
    }

    #[test]
    fn test_fps_zero_when_delta_zero() {
        let clock = FrameClock::new(Duration::from_millis(33));
        let now = clock.started_at() + Duration::from_millis(50);

        let info = clock.tick(now, Duration::ZERO, false);

        assert_eq!(info.fps, 0.0);
    }

    #[test]
    fn test_delta_carried_into_frame_info() {
        let clock = FrameClock::new(Duration::from_millis(33));
        let now = clock.started_at() + Duration::from_millis(66);

        let info = clock.tick(now, Duration::from_millis(33), false);

        assert_eq!(info.delta_time, Duration::from_millis(33));
        assert_relative_eq!(info.fps, 30.303, epsilon = 0.01);
    }
}
