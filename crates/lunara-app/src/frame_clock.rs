//! Fixed-timestep frame clock driving the trajectory animation.
//!
//! Frame times are accumulated and consumed in fixed steps, so the cursor
//! moves identically whether frames arrive fast, slow, or are replayed.

use std::time::Instant;

use tracing::warn;

/// Fixed animation step: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame time accepted before clamping, in seconds.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Accumulator-based fixed-step clock.
#[derive(Debug)]
pub struct FrameClock {
    previous_time: Instant,
    accumulator: f64,
    total_time: f64,
    frame_count: u64,
    step_count: u64,
}

impl FrameClock {
    /// A clock starting now.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_time: 0.0,
            frame_count: 0,
            step_count: 0,
        }
    }

    /// Measure wall-clock time since the previous frame and run the steps it covers.
    pub fn tick(&mut self, step_fn: impl FnMut(f64)) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(frame_time, step_fn)
    }

    /// Feed an explicit frame time in seconds, calling `step_fn(FIXED_DT)` once
    /// per whole step it covers. Returns the number of steps run.
    pub fn advance(&mut self, frame_time: f64, mut step_fn: impl FnMut(f64)) -> u32 {
        let mut frame_time = if frame_time.is_finite() {
            frame_time.max(0.0)
        } else {
            0.0
        };
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;
        let mut steps = 0;
        while self.accumulator >= FIXED_DT {
            step_fn(FIXED_DT);
            self.total_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            steps += 1;
        }

        self.step_count += u64::from(steps);
        self.frame_count += 1;
        steps
    }

    /// Fraction of a step left in the accumulator, in \[0, 1).
    pub fn alpha(&self) -> f64 {
        self.accumulator / FIXED_DT
    }

    /// Frames fed so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Fixed steps run so far.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Time covered by the steps run so far, in seconds.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
