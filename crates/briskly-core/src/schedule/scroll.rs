//! Continuous, drift-corrected scroll schedule.
//!
//! Position is a function of wall-clock time actually elapsed, not of tick
//! count: a delayed tick advances proportionally more, so cumulative
//! position tracks the nominal reading duration even under scheduler
//! jitter.

/// Nominal tick period when the host sustains a high refresh rate.
pub const FRAME_BUDGET_SMOOTH_MS: u32 = 16;

/// Coarser tick period for constrained hosts.
pub const FRAME_BUDGET_COARSE_MS: u32 = 32;

/// Outcome of a scroll schedule tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTick {
    /// Frame budget not yet elapsed, or schedule disarmed.
    Idle,
    /// Position advanced, still short of the total distance.
    Moved,
    /// Position reached the total distance; the reported value is clamped
    /// to it exactly and the schedule disarmed itself.
    Finished,
}

/// Advances `position` by the time actually elapsed since the previous
/// tick. Pure so it can be exercised without any timer.
pub fn advance(position: f32, delta_ms: u64, pixels_per_ms: f32) -> f32 {
    position + pixels_per_ms * delta_ms as f32
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollSchedule {
    total_distance: f32,
    pixels_per_ms: f32,
    frame_budget_ms: u64,
    position: f32,
    last_tick_ms: Option<u64>,
}

impl ScrollSchedule {
    pub fn new(total_distance: f32, duration_ms: u64, frame_budget_ms: u32) -> Self {
        let duration_ms = duration_ms.max(1);
        Self {
            total_distance,
            pixels_per_ms: total_distance / duration_ms as f32,
            frame_budget_ms: u64::from(frame_budget_ms.max(1)),
            position: 0.0,
            last_tick_ms: None,
        }
    }

    /// Seeds the delta reference; the first advancement is measured from
    /// here.
    pub fn arm(&mut self, now_ms: u64) {
        self.last_tick_ms = Some(now_ms);
    }

    pub fn pause(&mut self) {
        self.last_tick_ms = None;
    }

    /// Re-seeds the delta reference at `now_ms` so the first post-resume
    /// tick measures from the resume instant, not across the pause.
    pub fn resume(&mut self, now_ms: u64) {
        if self.position < self.total_distance {
            self.last_tick_ms = Some(now_ms);
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> ScrollTick {
        let Some(last) = self.last_tick_ms else {
            return ScrollTick::Idle;
        };
        let delta_ms = now_ms.saturating_sub(last);
        if delta_ms < self.frame_budget_ms {
            return ScrollTick::Idle;
        }

        self.last_tick_ms = Some(now_ms);
        self.position = advance(self.position, delta_ms, self.pixels_per_ms);
        if self.position >= self.total_distance {
            self.position = self.total_distance;
            self.last_tick_ms = None;
            return ScrollTick::Finished;
        }

        ScrollTick::Moved
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn total_distance(&self) -> f32 {
        self.total_distance
    }

    pub fn is_armed(&self) -> bool {
        self.last_tick_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_scales_with_elapsed_time() {
        assert_eq!(advance(0.0, 16, 0.5), 8.0);
        // A tick arriving twice as late advances twice as far.
        assert_eq!(advance(8.0, 32, 0.5), 24.0);
        assert_eq!(advance(3.0, 0, 0.5), 3.0);
    }

    #[test]
    fn jittered_ticks_track_wall_clock() {
        // 48_000 px over 48_000 ms: one pixel per millisecond.
        let mut schedule = ScrollSchedule::new(48_000.0, 48_000, 16);
        schedule.arm(0);

        let mut now_ms = 0u64;
        for delta in [16u64, 33, 16, 95, 17, 16, 160, 31] {
            now_ms += delta;
            assert_eq!(schedule.tick(now_ms), ScrollTick::Moved);
            assert_eq!(schedule.position(), now_ms as f32);
        }

        assert_eq!(schedule.tick(48_000), ScrollTick::Finished);
        assert_eq!(schedule.position(), 48_000.0);
    }

    #[test]
    fn completion_clamps_and_disarms() {
        let mut schedule = ScrollSchedule::new(1_000.0, 10_000, 16);
        schedule.arm(0);

        assert_eq!(schedule.tick(60_000), ScrollTick::Finished);
        assert_eq!(schedule.position(), 1_000.0);
        assert!(!schedule.is_armed());
        assert_eq!(schedule.tick(120_000), ScrollTick::Idle);
        assert_eq!(schedule.position(), 1_000.0);
    }

    #[test]
    fn ticks_inside_the_frame_budget_are_skipped() {
        let mut schedule = ScrollSchedule::new(1_000.0, 60_000, 16);
        schedule.arm(0);

        assert_eq!(schedule.tick(5), ScrollTick::Idle);
        assert_eq!(schedule.tick(15), ScrollTick::Idle);
        assert_eq!(schedule.tick(16), ScrollTick::Moved);
    }

    #[test]
    fn resume_measures_from_the_resume_instant() {
        let mut schedule = ScrollSchedule::new(1_000.0, 60_000, 16);
        schedule.arm(0);
        assert_eq!(schedule.tick(1_000), ScrollTick::Moved);
        let before_pause = schedule.position();

        schedule.pause();
        assert_eq!(schedule.tick(30_000), ScrollTick::Idle);

        schedule.resume(30_000);
        assert_eq!(schedule.tick(30_016), ScrollTick::Moved);
        let jump = schedule.position() - before_pause;
        assert!(jump < 1.0, "post-resume delta spans the pause: {jump}");
    }
}
