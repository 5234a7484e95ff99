//! Frame clocks and the accumulated animation time.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Supplies the delta fed into [`AccumulatedTime`] once per frame.
pub trait Clock {
    /// Time since the previous call, in the clock's units. Never negative.
    ///
    /// The time update `time += delta * time_frequency` does not care about
    /// units: `FrameClock` reports milliseconds by default (`delta_scale`
    /// 1000), so `time_frequency` is per millisecond.
    fn frame_delta(&mut self) -> f32;
}

/// Wall clock with a rolling window for FPS reporting.
///
/// Deltas are wall-clock seconds multiplied by `delta_scale`
/// (1000 gives milliseconds).
pub struct FrameClock {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    max_samples: usize,
    delta_scale: f32,
}

impl FrameClock {
    /// Create a clock with a 120-sample rolling window.
    pub fn new(delta_scale: f32) -> Self {
        Self {
            frame_times: VecDeque::new(),
            last_frame: Instant::now(),
            max_samples: 120,
            delta_scale: sanitize_delta(delta_scale),
        }
    }

    /// Record the start of a new frame and return the raw elapsed time.
    pub fn begin_frame(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        dt
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    pub fn delta_scale(&self) -> f32 {
        self.delta_scale
    }
}

impl Clock for FrameClock {
    fn frame_delta(&mut self) -> f32 {
        let dt = self.begin_frame();
        sanitize_delta(dt.as_secs_f32() * self.delta_scale)
    }
}

/// Returns the same delta every frame. Used for headless stepping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    delta: f32,
}

impl FixedClock {
    pub fn new(delta: f32) -> Self {
        Self {
            delta: sanitize_delta(delta),
        }
    }
}

impl Clock for FixedClock {
    fn frame_delta(&mut self) -> f32 {
        self.delta
    }
}

fn sanitize_delta(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// `time += delta * frequency`, never decreasing and never reset.
///
/// Accumulated in `f64` so long sessions keep sub-step precision; the
/// shader receives the `f32` value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccumulatedTime {
    value: f64,
}

impl AccumulatedTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame. Returns whether the value changed.
    pub fn advance(&mut self, delta: f32, frequency: f32) -> bool {
        let step = sanitize_delta(delta) as f64 * sanitize_delta(frequency) as f64;
        if step > 0.0 && step.is_finite() {
            self.value += step;
            true
        } else {
            false
        }
    }

    pub fn value(&self) -> f32 {
        self.value as f32
    }
}
