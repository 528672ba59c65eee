//! Frame timing and performance monitoring.
//!
//! [`FrameTimer`] stamps each frame of the redraw loop with an elapsed
//! time and a delta. A fixed delta can be pinned so the simulation
//! single-steps deterministically with no display clock behind it.
//!
//! [`PerfMonitor`] watches the frame rate over one-second windows and
//! reports quality drops. Drops are one-way: the level never climbs
//! back, even if the frame rate recovers.

use std::time::{Duration, Instant};

/// Per-frame clock for the redraw loop.
///
/// Rate measurement is not its job; that belongs to [`PerfMonitor`].
#[derive(Debug)]
pub struct FrameTimer {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    /// When set, reported instead of the measured delta.
    fixed_delta: Option<f32>,
}

impl FrameTimer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fixed_delta: None,
        }
    }

    /// Stamp a frame. Call once per redraw; returns
    /// `(elapsed_time, delta_time)`.
    pub fn update(&mut self) -> (f32, f32) {
        let now = Instant::now();
        self.delta_secs = self
            .fixed_delta
            .unwrap_or_else(|| now.duration_since(self.last_frame).as_secs_f32());
        self.elapsed_secs = now.duration_since(self.start).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
        (self.elapsed_secs, self.delta_secs)
    }

    /// Seconds since the timer was created.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Seconds between the last two frames (or the pinned delta).
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames stamped so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Pin the delta to a fixed value; `None` returns to wall-clock
    /// measurement.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendering quality level, dropped by [`PerfMonitor`] under sustained
/// low frame rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PerfLevel {
    /// Terminal: the host should degrade its effects.
    Low,
    Medium,
    High,
}

/// Frame-rate watcher with one-way quality drops.
///
/// Feed it every frame; once per window (one second) it classifies the
/// measured rate: under 30 fps is [`PerfLevel::Low`], under 50 is
/// [`PerfLevel::Medium`]. The level is monotone non-increasing, so each
/// drop is reported exactly once and a recovered frame rate never
/// raises it again.
#[derive(Debug)]
pub struct PerfMonitor {
    window_start: Instant,
    window: Duration,
    frames: u32,
    level: PerfLevel,
}

/// Frame rates below this are classified as [`PerfLevel::Low`].
pub const LOW_FPS: f32 = 30.0;

/// Frame rates below this are classified as [`PerfLevel::Medium`].
pub const MEDIUM_FPS: f32 = 50.0;

impl PerfMonitor {
    /// Start monitoring at `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            window: Duration::from_secs(1),
            frames: 0,
            level: PerfLevel::High,
        }
    }

    /// Record one frame. Returns the new level if this frame closed a
    /// window whose rate was lower than every previous window's.
    pub fn frame(&mut self, now: Instant) -> Option<PerfLevel> {
        self.frames += 1;

        let elapsed = now.duration_since(self.window_start);
        if elapsed < self.window {
            return None;
        }

        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.window_start = now;

        let measured = if fps < LOW_FPS {
            PerfLevel::Low
        } else if fps < MEDIUM_FPS {
            PerfLevel::Medium
        } else {
            PerfLevel::High
        };

        if measured < self.level {
            self.level = measured;
            Some(measured)
        } else {
            None
        }
    }

    /// The current quality level.
    pub fn level(&self) -> PerfLevel {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_timer_update() {
        let mut timer = FrameTimer::new();
        thread::sleep(Duration::from_millis(10));
        let (elapsed, delta) = timer.update();

        assert!(elapsed > 0.0);
        assert!(delta > 0.0);
        assert_eq!(timer.frame(), 1);
    }

    #[test]
    fn test_fixed_delta() {
        let mut timer = FrameTimer::new();
        timer.set_fixed_delta(Some(1.0 / 60.0));

        thread::sleep(Duration::from_millis(30));
        timer.update();

        assert!((timer.delta() - 1.0 / 60.0).abs() < 0.0001);
    }

    /// Drive the monitor with synthetic timestamps: `frames` frames
    /// spread over `secs`, returning the last emitted level change.
    fn run_window(
        monitor: &mut PerfMonitor,
        start: Instant,
        frames: u32,
        secs: f32,
    ) -> Option<PerfLevel> {
        let mut out = None;
        for i in 1..=frames {
            let t = start + Duration::from_secs_f32(secs * i as f32 / frames as f32);
            if let Some(level) = monitor.frame(t) {
                out = Some(level);
            }
        }
        out
    }

    #[test]
    fn test_monitor_flags_low_fps_once() {
        let start = Instant::now();
        let mut monitor = PerfMonitor::new(start);

        // 20 fps for one second: drops straight to Low.
        assert_eq!(
            run_window(&mut monitor, start, 20, 1.0),
            Some(PerfLevel::Low)
        );
        assert_eq!(monitor.level(), PerfLevel::Low);

        // Another slow window reports nothing new.
        let later = start + Duration::from_secs(1);
        assert_eq!(run_window(&mut monitor, later, 20, 1.0), None);
    }

    #[test]
    fn test_monitor_never_recovers() {
        let start = Instant::now();
        let mut monitor = PerfMonitor::new(start);

        assert_eq!(
            run_window(&mut monitor, start, 40, 1.0),
            Some(PerfLevel::Medium)
        );

        // A fast window afterwards does not raise the level.
        let later = start + Duration::from_secs(1);
        assert_eq!(run_window(&mut monitor, later, 120, 1.0), None);
        assert_eq!(monitor.level(), PerfLevel::Medium);
    }

    #[test]
    fn test_monitor_healthy_rate_stays_high() {
        let start = Instant::now();
        let mut monitor = PerfMonitor::new(start);

        assert_eq!(run_window(&mut monitor, start, 60, 1.0), None);
        assert_eq!(monitor.level(), PerfLevel::High);
    }
}
