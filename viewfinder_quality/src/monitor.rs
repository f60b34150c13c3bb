// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::VecDeque;

/// Capacity of the rolling sample windows.
const SAMPLE_WINDOW: usize = 60;

/// Relative spread between fps estimation methods above which the
/// measurement is flagged as reduced-confidence.
const CONFIDENCE_SPREAD: f64 = 0.15;

/// How much of the history (in milliseconds) the windowed-count fps
/// estimator looks at.
const COUNT_WINDOW_MS: f64 = 1000.0;

/// Confidence in the monitor's own measurements, derived by comparing
/// independent estimation methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Confidence {
    /// The estimation methods agree.
    Full,
    /// The estimation methods disagree beyond the tolerated spread; treat
    /// the numbers as indicative only.
    Reduced,
}

/// The three independent fps estimates used for cross-validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FpsEstimates {
    /// `1000 / mean(frame time)` over the window.
    pub inverse_mean: f64,
    /// Frames counted within the most recent second of wall time.
    pub windowed_count: f64,
    /// Frame count over the first-to-last timestamp span of the window.
    pub endpoint_diff: f64,
}

impl FpsEstimates {
    /// Relative spread between the largest and smallest estimate.
    #[must_use]
    pub fn relative_spread(&self) -> f64 {
        let lo = self
            .inverse_mean
            .min(self.windowed_count)
            .min(self.endpoint_diff);
        let hi = self
            .inverse_mean
            .max(self.windowed_count)
            .max(self.endpoint_diff);
        if hi <= 0.0 { 0.0 } else { (hi - lo) / hi }
    }
}

/// Rolling frame-time and memory sampler.
///
/// The monitor owns two bounded ring buffers (most-recent 60 entries each)
/// of raw frame-time and heap readings and derives rolling fps and averages
/// from them. It never exposes the raw buffers; consumers read computed
/// metrics or a [`DiagnosticsSnapshot`](crate::DiagnosticsSnapshot).
///
/// The host drives sampling from its animation-frame callback:
/// [`PerformanceMonitor::record_frame`] takes the frame's duration and the
/// host clock's timestamp. Keeping both lets the monitor cross-validate its
/// fps estimate three independent ways and flag disagreement as reduced
/// confidence rather than silently reporting a wrong number.
#[derive(Debug, Default)]
pub struct PerformanceMonitor {
    running: bool,
    frame_times: VecDeque<f64>,
    timestamps: VecDeque<f64>,
    memory_mb: VecDeque<f64>,
}

impl PerformanceMonitor {
    /// Creates a stopped monitor with empty sample windows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins accepting samples. Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops accepting samples. Idempotent; retained samples stay readable.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the sampling loop is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ingests one frame sample: its duration and the host timestamp at
    /// which it completed. Ignored while stopped.
    pub fn record_frame(&mut self, frame_time_ms: f64, now_ms: f64) {
        if !self.running || !frame_time_ms.is_finite() || frame_time_ms < 0.0 {
            return;
        }
        push_bounded(&mut self.frame_times, frame_time_ms);
        push_bounded(&mut self.timestamps, now_ms);
    }

    /// Ingests one heap reading in megabytes. Ignored while stopped.
    ///
    /// Hosts without a memory API simply never call this; every
    /// memory-dependent consumer treats the absence as "no pressure".
    pub fn record_memory(&mut self, heap_mb: f64) {
        if !self.running || !heap_mb.is_finite() || heap_mb < 0.0 {
            return;
        }
        push_bounded(&mut self.memory_mb, heap_mb);
    }

    /// Number of frame samples currently held.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// Rolling average frame time in milliseconds, if any samples exist.
    #[must_use]
    pub fn average_frame_time_ms(&self) -> Option<f64> {
        if self.frame_times.is_empty() {
            return None;
        }
        Some(self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64)
    }

    /// Rolling fps derived from the average frame time.
    #[must_use]
    pub fn fps(&self) -> Option<f64> {
        self.average_frame_time_ms()
            .filter(|&avg| avg > 0.0)
            .map(|avg| 1000.0 / avg)
    }

    /// Most recent heap reading in megabytes, if the host reports memory.
    #[must_use]
    pub fn memory_mb(&self) -> Option<f64> {
        self.memory_mb.back().copied()
    }

    /// The three independent fps estimates, if at least two frames exist.
    ///
    /// Disagreement between the duration-derived and timestamp-derived
    /// numbers usually means the host clamped or coalesced its frame
    /// callbacks; the spread feeds [`PerformanceMonitor::confidence`].
    #[must_use]
    pub fn fps_estimates(&self) -> Option<FpsEstimates> {
        if self.frame_times.len() < 2 {
            return None;
        }
        let inverse_mean = self.fps()?;

        let last = *self.timestamps.back()?;
        let first = *self.timestamps.front()?;
        let count_in_window = self
            .timestamps
            .iter()
            .filter(|&&t| last - t <= COUNT_WINDOW_MS)
            .count();
        let windowed_count = count_in_window as f64 * 1000.0 / COUNT_WINDOW_MS;

        let span = last - first;
        let endpoint_diff = if span > 0.0 {
            (self.timestamps.len() - 1) as f64 * 1000.0 / span
        } else {
            inverse_mean
        };

        Some(FpsEstimates {
            inverse_mean,
            windowed_count,
            endpoint_diff,
        })
    }

    /// Measurement confidence from cross-validating the fps estimates.
    ///
    /// Returns [`Confidence::Full`] when there is not enough data to
    /// disagree yet.
    #[must_use]
    pub fn confidence(&self) -> Confidence {
        match self.fps_estimates() {
            Some(estimates) if estimates.relative_spread() > CONFIDENCE_SPREAD => {
                Confidence::Reduced
            }
            _ => Confidence::Full,
        }
    }
}

fn push_bounded(buffer: &mut VecDeque<f64>, value: f64) {
    if buffer.len() == SAMPLE_WINDOW {
        buffer.pop_front();
    }
    buffer.push_back(value);
}

/// Clock abstraction for the sampling-overhead probe, so tests can supply a
/// deterministic time source.
pub trait ProbeClock {
    /// Current time in milliseconds, monotonically non-decreasing.
    fn now_ms(&mut self) -> f64;
}

/// Result of a sampling-overhead measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverheadReport {
    /// Wall time for the instrumented run, in milliseconds.
    pub instrumented_ms: f64,
    /// Wall time for the uninstrumented run, in milliseconds.
    pub uninstrumented_ms: f64,
    /// Fractional overhead of instrumentation, relative to the
    /// uninstrumented run.
    pub overhead_fraction: f64,
}

/// Measures the monitor's own sampling overhead by running `workload`
/// `iterations` times twice: once plain, once with per-iteration
/// [`PerformanceMonitor::record_frame`] instrumentation.
///
/// This validates the monitor itself, not the animations it observes: a
/// probe reporting significant overhead means the sampling is distorting
/// the very frame budget it measures.
pub fn measure_overhead(
    monitor: &mut PerformanceMonitor,
    mut workload: impl FnMut(),
    iterations: usize,
    clock: &mut impl ProbeClock,
) -> OverheadReport {
    let plain_start = clock.now_ms();
    for _ in 0..iterations {
        workload();
    }
    let uninstrumented_ms = clock.now_ms() - plain_start;

    let was_running = monitor.is_running();
    monitor.start();
    let instrumented_start = clock.now_ms();
    let mut previous = instrumented_start;
    for _ in 0..iterations {
        workload();
        let now = clock.now_ms();
        monitor.record_frame(now - previous, now);
        previous = now;
    }
    let instrumented_ms = clock.now_ms() - instrumented_start;
    if !was_running {
        monitor.stop();
    }

    let overhead_fraction = if uninstrumented_ms > 0.0 {
        ((instrumented_ms - uninstrumented_ms) / uninstrumented_ms).max(0.0)
    } else {
        0.0
    };

    OverheadReport {
        instrumented_ms,
        uninstrumented_ms,
        overhead_fraction,
    }
}
